//! Tests for interactive exploration sessions

use std::io::Cursor;

use detective_quest::application::{explore, ExplorationReport, ExploreOptions, Termination};
use detective_quest::domain::{Language, MansionBuilder, RoomTree};
use detective_quest::util::testing;
use rstest::rstest;

fn play(tree: &RoomTree, input: &str, options: ExploreOptions) -> (ExplorationReport, String) {
    testing::init_test_setup();
    let mut out = Vec::new();
    let report = explore(tree, Cursor::new(input.as_bytes()), &mut out, options)
        .expect("exploration should not fail on in-memory I/O");
    (report, String::from_utf8(out).expect("narration is UTF-8"))
}

fn pt() -> ExploreOptions {
    ExploreOptions {
        language: Language::Pt,
        ..Default::default()
    }
}

fn mansion(language: Language) -> RoomTree {
    MansionBuilder::new(language).build().unwrap()
}

/// Every consecutive pair of visits must be a real parent-child edge.
fn assert_valid_path(tree: &RoomTree, report: &ExplorationReport) {
    let rooms = report.visited.rooms();
    if let Some(first) = rooms.first() {
        assert_eq!(Some(*first), tree.root());
    }
    for pair in rooms.windows(2) {
        assert!(
            tree.is_child_of(pair[0], pair[1]),
            "{:?} is not a child of {:?}",
            tree.name(pair[1]),
            tree.name(pair[0])
        );
    }
}

#[test]
fn given_mansion_when_left_left_quit_then_three_rooms_and_player_quit() {
    // Arrange
    let tree = mansion(Language::Pt);

    // Act
    let (report, out) = play(&tree, "e\ne\ns\n", pt());

    // Assert
    assert_eq!(report.termination, Termination::PlayerQuit);
    assert_eq!(
        report.visited.names(),
        vec!["Hall de Entrada", "Sala de Estar", "Cozinha"]
    );
    assert!(out.contains("Saindo da exploração por solicitação do usuário."));
    assert!(out.contains(
        "\n--- Resumo das salas visitadas ---\n\
         1) Hall de Entrada\n\
         2) Sala de Estar\n\
         3) Cozinha\n\
         ----------------------------------\n"
    ));
    assert_valid_path(&tree, &report);
}

#[test]
fn given_mansion_when_right_three_times_then_reaches_dome_without_quit() {
    // Arrange
    let tree = mansion(Language::Pt);

    // Act
    let (report, out) = play(&tree, "d\nd\nd\n", pt());

    // Assert
    assert_eq!(report.termination, Termination::ReachedLeaf);
    assert_eq!(report.visited.len(), 4);
    assert_eq!(report.visited.names().last(), Some(&"Cúpula"));
    assert!(out.contains("Você chegou a um cômodo sem mais caminhos (Cúpula)."));
    assert!(!out.contains("Saindo da exploração"));
    assert_valid_path(&tree, &report);
}

#[test]
fn given_kitchen_when_going_right_then_cursor_and_log_unchanged() {
    // Arrange
    let tree = mansion(Language::Pt);

    // Act
    let (report, out) = play(&tree, "e\ne\nd\ne\n", pt());

    // Assert
    assert!(out.contains("Não há caminho para a direita a partir de Cozinha."));
    assert_eq!(
        report.visited.names(),
        vec!["Hall de Entrada", "Sala de Estar", "Cozinha", "Despensa"]
    );
    assert_eq!(report.termination, Termination::ReachedLeaf);
}

#[test]
fn given_kitchen_when_prompting_then_only_existing_directions_offered() {
    let tree = mansion(Language::Pt);

    let (_, out) = play(&tree, "e\ne\ns\n", pt());

    assert!(out.contains("Escolha o caminho: (e) esquerda | (d) direita | (s) sair"));
    assert!(out.contains("Escolha o caminho: (e) esquerda | (s) sair"));
}

#[test]
fn given_empty_tree_when_exploring_then_empty_map_and_no_visits() {
    // Arrange
    let tree = RoomTree::new();

    // Act
    let (report, out) = play(&tree, "e\n", pt());

    // Assert
    assert_eq!(report.termination, Termination::EmptyMap);
    assert!(report.visited.is_empty());
    assert_eq!(out, "Mapa vazio. Não há salas para explorar.\n");
}

#[test]
fn given_single_room_when_exploring_then_stuck_immediately() {
    // Arrange
    let mut tree = RoomTree::new();
    tree.create_room("Closet").unwrap();

    // Act
    let (report, out) = play(&tree, "", pt());

    // Assert
    assert_eq!(report.termination, Termination::ReachedLeaf);
    assert_eq!(report.visited.names(), vec!["Closet"]);
    assert!(!out.contains("Escolha o caminho"));
    assert!(out.contains("1) Closet\n"));
}

#[rstest]
#[case::unknown_letter("x\ne\ns\n")]
#[case::number("1\ne\ns\n")]
fn given_unrecognised_token_when_exploring_then_reprompts(#[case] input: &str) {
    let tree = mansion(Language::Pt);

    let (report, out) = play(&tree, input, pt());

    assert!(out.contains("Opção inválida. Use 'e' (esquerda), 'd' (direita) ou 's' (sair)."));
    assert_eq!(report.visited.names(), vec!["Hall de Entrada", "Sala de Estar"]);
    assert_eq!(report.termination, Termination::PlayerQuit);
}

#[rstest]
#[case::spaced("e e s\n")]
#[case::packed("ees\n")]
#[case::mixed("e\n es\n")]
fn given_several_keys_on_one_line_when_exploring_then_each_is_played(#[case] input: &str) {
    // Arrange
    let tree = mansion(Language::Pt);

    // Act
    let (report, out) = play(&tree, input, pt());

    // Assert
    assert_eq!(report.termination, Termination::PlayerQuit);
    assert_eq!(
        report.visited.names(),
        vec!["Hall de Entrada", "Sala de Estar", "Cozinha"]
    );
    assert!(!out.contains("Opção inválida"));
    assert!(!out.contains("Entrada inválida"));
}

#[test]
fn given_invalid_key_inside_a_line_when_exploring_then_reported_and_rest_played() {
    let tree = mansion(Language::Pt);

    let (report, out) = play(&tree, "exs\n", pt());

    assert_eq!(out.matches("Opção inválida").count(), 1);
    assert_eq!(report.visited.names(), vec!["Hall de Entrada", "Sala de Estar"]);
    assert_eq!(report.termination, Termination::PlayerQuit);
}

#[test]
fn given_uppercase_and_blank_lines_when_exploring_then_accepted() {
    let tree = mansion(Language::Pt);

    let (report, out) = play(&tree, "\n   \n  D  \nS\n", pt());

    assert_eq!(report.visited.names(), vec!["Hall de Entrada", "Biblioteca"]);
    assert_eq!(report.termination, Termination::PlayerQuit);
    assert!(!out.contains("Opção inválida"));
}

#[test]
fn given_input_ends_early_when_exploring_then_input_closed_with_summary() {
    // Arrange
    let tree = mansion(Language::Pt);

    // Act
    let (report, out) = play(&tree, "e\n", pt());

    // Assert
    assert_eq!(report.termination, Termination::InputClosed);
    assert_eq!(report.visited.len(), 2);
    assert!(out.contains("Entrada inválida. Tente novamente."));
    assert!(out.contains("2) Sala de Estar\n"));
}

#[test]
fn given_small_capacity_when_walking_deeper_then_visit_log_full() {
    // Arrange
    let tree = mansion(Language::Pt);
    let options = ExploreOptions {
        language: Language::Pt,
        max_visits: 2,
    };

    // Act
    let (report, out) = play(&tree, "d\nd\nd\n", options);

    // Assert
    assert_eq!(report.termination, Termination::VisitLogFull);
    assert_eq!(report.visited.names(), vec!["Hall de Entrada", "Biblioteca"]);
    assert!(out.contains("Limite de 2 salas visitadas atingido."));
    assert!(!out.contains("Você foi para: Observatório"));
}

#[test]
fn given_english_when_left_left_quit_then_english_narration() {
    // Arrange
    let tree = mansion(Language::En);
    let options = ExploreOptions {
        language: Language::En,
        ..Default::default()
    };

    // Act
    let (report, out) = play(&tree, "l\nL\nq\n", options);

    // Assert
    assert_eq!(
        report.visited.names(),
        vec!["Entrance Hall", "Living Room", "Kitchen"]
    );
    assert!(out.starts_with("Welcome to Detective Quest"));
    assert!(out.contains("You went to: Kitchen"));
    assert!(out.contains("--- Summary of visited rooms ---"));
}

#[test]
fn given_any_script_when_exploring_then_log_is_a_real_path() {
    let tree = mansion(Language::Pt);
    let tokens = ["e", "d", "s", "x"];

    // Every script of four tokens
    for a in tokens {
        for b in tokens {
            for c in tokens {
                for d in tokens {
                    let input = format!("{a}\n{b}\n{c}\n{d}\n");
                    let (report, _) = play(&tree, &input, pt());

                    assert!(!report.visited.is_empty(), "script {input:?}");
                    assert!(report.visited.len() <= 4, "script {input:?}");
                    assert_valid_path(&tree, &report);
                }
            }
        }
    }
}

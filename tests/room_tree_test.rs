//! Tests for RoomTree construction, guards and teardown

use detective_quest::domain::{DomainError, Language, MansionBuilder, RoomTree, Side};
use detective_quest::util::testing;
use rstest::{fixture, rstest};

#[fixture]
fn mansion() -> RoomTree {
    testing::init_test_setup();
    MansionBuilder::new(Language::Pt).build().expect("build mansion")
}

#[rstest]
fn given_fixed_mansion_when_walking_preorder_then_matches_layout(mansion: RoomTree) {
    // Act
    let names: Vec<&str> = mansion.iter().map(|(_, room)| room.name()).collect();

    // Assert
    assert_eq!(
        names,
        vec![
            "Hall de Entrada",
            "Sala de Estar",
            "Cozinha",
            "Despensa",
            "Sala de Jantar",
            "Biblioteca",
            "Escritório",
            "Observatório",
            "Cúpula",
        ]
    );
    assert_eq!(mansion.len(), 9);
    assert_eq!(mansion.depth(), 4);
}

#[rstest]
fn given_fixed_mansion_when_listing_leaves_then_left_to_right(mansion: RoomTree) {
    assert_eq!(
        mansion.leaf_names(),
        vec!["Despensa", "Sala de Jantar", "Escritório", "Cúpula"]
    );
}

#[rstest]
fn given_fixed_mansion_when_inspecting_kitchen_then_only_left_child(mansion: RoomTree) {
    // Arrange
    let kitchen = mansion
        .iter()
        .find(|(_, room)| room.name() == "Cozinha")
        .map(|(id, _)| id)
        .unwrap();

    // Act
    let room = mansion.room(kitchen).unwrap();

    // Assert
    assert_eq!(mansion.name(room.left().unwrap()), Some("Despensa"));
    assert!(room.right().is_none());
    assert!(!room.is_leaf());
}

#[rstest]
#[case(Language::Pt, "Hall de Entrada", "Cúpula")]
#[case(Language::En, "Entrance Hall", "Dome")]
fn given_language_when_building_mansion_then_names_localised(
    #[case] language: Language,
    #[case] root: &str,
    #[case] last_leaf: &str,
) {
    let tree = MansionBuilder::new(language).build().unwrap();

    assert_eq!(tree.name(tree.root().unwrap()), Some(root));
    assert_eq!(tree.leaf_names().last().map(String::as_str), Some(last_leaf));
}

#[test]
fn given_occupied_slot_when_attaching_then_slot_occupied() {
    // Arrange
    let mut tree = RoomTree::new();
    let hall = tree.create_room("Hall").unwrap();
    let first = tree.create_room("First").unwrap();
    let second = tree.create_room("Second").unwrap();
    tree.attach_left(hall, first).unwrap();

    // Act
    let err = tree.attach_left(hall, second).unwrap_err();

    // Assert
    assert_eq!(
        err,
        DomainError::SlotOccupied {
            parent: "Hall".into(),
            side: Side::Left,
            existing: "First".into(),
        }
    );
    assert!(tree.room(second).unwrap().parent().is_none());
}

#[test]
fn given_attached_child_when_attaching_elsewhere_then_already_attached() {
    // Arrange
    let mut tree = RoomTree::new();
    let hall = tree.create_room("Hall").unwrap();
    let west = tree.create_room("West").unwrap();
    let east = tree.create_room("East").unwrap();
    tree.attach_left(hall, west).unwrap();
    tree.attach_right(hall, east).unwrap();

    // Act
    let err = tree.attach_left(east, west).unwrap_err();

    // Assert
    assert!(matches!(err, DomainError::AlreadyAttached { .. }));
    assert!(tree.room(east).unwrap().is_leaf());
}

#[test]
fn given_ancestor_when_attaching_below_descendant_then_cycle_detected() {
    // Arrange
    let mut tree = RoomTree::new();
    let hall = tree.create_room("Hall").unwrap();
    let west = tree.create_room("West").unwrap();
    tree.attach_left(hall, west).unwrap();

    // Act
    let err = tree.attach_right(west, hall).unwrap_err();

    // Assert
    assert_eq!(
        err,
        DomainError::CycleDetected {
            parent: "West".into(),
            child: "Hall".into(),
        }
    );
}

#[test]
fn given_root_when_attaching_below_detached_room_then_rejected() {
    let mut tree = RoomTree::new();
    let hall = tree.create_room("Hall").unwrap();
    let shed = tree.create_room("Shed").unwrap();

    let err = tree.attach_left(shed, hall).unwrap_err();

    assert_eq!(err, DomainError::RootAttached("Hall".into()));
}

#[test]
fn given_built_tree_when_destroying_then_every_room_released_once() {
    // Arrange
    let mut tree = MansionBuilder::default().build().unwrap();
    let root = tree.root().unwrap();

    // Act
    let released = tree.destroy();

    // Assert
    assert_eq!(released, 9);
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert!(tree.get(root).is_none());
    assert_eq!(tree.destroy(), 0);
}

#[test]
fn given_empty_tree_when_destroying_then_noop() {
    let mut tree = RoomTree::new();

    assert_eq!(tree.destroy(), 0);
    assert_eq!(tree.depth(), 0);
    assert!(tree.leaf_names().is_empty());
}

#[test]
fn given_detached_room_when_destroying_then_it_is_released_too() {
    let mut tree = RoomTree::new();
    let hall = tree.create_room("Hall").unwrap();
    let west = tree.create_room("West").unwrap();
    tree.attach_left(hall, west).unwrap();
    tree.create_room("Forgotten").unwrap();

    assert_eq!(tree.destroy(), 3);
    assert!(tree.is_empty());
}

#[test]
fn given_postorder_when_destroying_then_children_precede_parents() {
    let tree = MansionBuilder::new(Language::En).build().unwrap();

    let order: Vec<&str> = tree.iter_postorder().map(|(_, room)| room.name()).collect();

    assert_eq!(
        order,
        vec![
            "Pantry",
            "Kitchen",
            "Dining Room",
            "Living Room",
            "Office",
            "Dome",
            "Observatory",
            "Library",
            "Entrance Hall",
        ]
    );
}

#[test]
fn given_detached_room_when_set_as_root_then_tree_starts_there() {
    let mut tree = RoomTree::new();
    let old = tree.create_room("Old").unwrap();
    let new = tree.create_room("New").unwrap();
    let child = tree.create_room("Child").unwrap();
    tree.attach_left(old, child).unwrap();

    tree.set_root(new).unwrap();
    assert_eq!(tree.root(), Some(new));
    assert!(matches!(
        tree.set_root(child).unwrap_err(),
        DomainError::AlreadyAttached { .. }
    ));
}

use game_core::{GameError, Item, KitType, ScriptedRng, SlotError, StatKind};
use runtime::{GameSession, RuntimeConfig, RuntimeError};

fn session_with_items(items: &[&str]) -> GameSession<ScriptedRng> {
    let config = RuntimeConfig {
        starting_items: items.iter().map(|name| Item::new(*name)).collect(),
        ..RuntimeConfig::default()
    };
    GameSession::with_rng(config, ScriptedRng::constant(1)).expect("session should build")
}

fn inventory_names(session: &GameSession<ScriptedRng>) -> Vec<String> {
    session
        .inventory()
        .items()
        .iter()
        .map(|item| item.name.clone())
        .collect()
}

fn equipped_name(session: &GameSession<ScriptedRng>, slot: &str) -> Option<String> {
    session
        .player()
        .equipped_items()
        .get_item(slot)
        .unwrap()
        .map(|item| item.name.clone())
}

#[test]
fn default_session_starts_with_one_item() {
    let session = GameSession::with_rng(RuntimeConfig::default(), ScriptedRng::constant(1)).unwrap();
    let items = session.inventory().items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].stats.get_stat(StatKind::MaximumHealth), Ok(5));
    assert_eq!(session.inventory().capacity(), 4);
    assert!(!session.inventory_full());
}

#[test]
fn taking_items_stops_at_capacity() {
    let mut session = session_with_items(&["a"]);
    for name in ["b", "c", "d"] {
        session.take_item(Item::new(name)).unwrap();
    }
    assert!(session.inventory_full());

    let err = session.take_item(Item::new("e")).unwrap_err();
    assert_eq!(err, RuntimeError::InventoryFull { capacity: 4 });
    assert_eq!(err.error_code(), "INVENTORY_FULL");
    assert_eq!(inventory_names(&session), vec!["a", "b", "c", "d"]);

    assert_eq!(session.discard_item(0).unwrap().name, "a");
    assert!(!session.inventory_full());
    assert_eq!(session.discard_item(9), Err(RuntimeError::InventoryIndex(9)));
}

#[test]
fn too_many_starting_items_fail_to_build() {
    let config = RuntimeConfig {
        inventory_size: 1,
        starting_items: vec![Item::new("a"), Item::new("b")],
        ..RuntimeConfig::default()
    };
    assert!(matches!(
        GameSession::with_rng(config, ScriptedRng::constant(1)),
        Err(RuntimeError::InventoryFull { capacity: 1 })
    ));
}

#[test]
fn equipping_swaps_with_inventory() {
    let mut session = session_with_items(&["Sword", "Axe"]);

    session.equip_from_inventory(0, "Weapon").unwrap();
    assert_eq!(equipped_name(&session, "Weapon").as_deref(), Some("Sword"));
    assert_eq!(inventory_names(&session), vec!["Axe"]);

    session.equip_from_inventory(0, "Weapon").unwrap();
    assert_eq!(equipped_name(&session, "Weapon").as_deref(), Some("Axe"));
    assert_eq!(inventory_names(&session), vec!["Sword"]);

    assert_eq!(session.unequip("Weapon"), Ok(true));
    assert_eq!(equipped_name(&session, "Weapon"), None);
    assert_eq!(inventory_names(&session), vec!["Sword", "Axe"]);

    assert_eq!(session.unequip("Amulet"), Ok(false));
}

#[test]
fn unknown_slot_leaves_inventory_alone() {
    let mut session = session_with_items(&["Hat"]);

    let err = session.equip_from_inventory(0, "Helmet").unwrap_err();
    assert_eq!(
        err,
        RuntimeError::Slot(SlotError::UnknownSlot {
            slot: "Helmet".to_string(),
            kit: KitType::Human,
        })
    );
    assert_eq!(inventory_names(&session), vec!["Hat"]);
    assert!(session.unequip("Helmet").is_err());
    assert_eq!(
        session.equip_from_inventory(3, "Armour"),
        Err(RuntimeError::InventoryIndex(3))
    );
}

#[test]
fn unequip_needs_inventory_space() {
    let mut session = session_with_items(&["Charm", "b", "c", "d"]);
    session.equip_from_inventory(0, "Amulet").unwrap();
    session.take_item(Item::new("e")).unwrap();
    assert!(session.inventory_full());

    assert_eq!(
        session.unequip("Amulet"),
        Err(RuntimeError::InventoryFull { capacity: 4 })
    );
    assert_eq!(equipped_name(&session, "Amulet").as_deref(), Some("Charm"));
}

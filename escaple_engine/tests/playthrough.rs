use std::path::PathBuf;

use escaple_engine::testing::ScriptedFrontend;
use escaple_engine::{ClickOutcome, Dismissal, EscapeWorld, load_world_from};

const STUDY: usize = 0;
const WORKSHOP: usize = 1;
const LIBRARY: usize = 2;
const VAULT: usize = 3;

fn shipped_world() -> EscapeWorld {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/rooms.toml");
    load_world_from(&path).expect("shipped rooms.toml should load")
}

fn goto(world: &mut EscapeWorld, frontend: &mut ScriptedFrontend, room: usize) {
    assert!(world.enter_room(frontend, room));
}

fn click(world: &mut EscapeWorld, frontend: &mut ScriptedFrontend, label: &str) {
    let index = world
        .find_hotspot(label)
        .unwrap_or_else(|| panic!("no hotspot '{label}' in {}", world.current_room().name));
    assert_eq!(world.click(frontend, index), ClickOutcome::Dispatched);
}

fn latest(world: &EscapeWorld) -> &str {
    world.session.messages.latest().unwrap_or_default()
}

fn items(world: &EscapeWorld) -> Vec<&str> {
    world.session.state.items().iter().map(String::as_str).collect()
}

#[test]
fn shipped_world_has_four_rooms() {
    let world = shipped_world();
    let names: Vec<&str> = world.rooms.iter().map(|room| room.name.as_str()).collect();
    assert_eq!(names, ["Study", "Workshop", "Library", "Vault"]);
    assert!(world.rooms.iter().all(|room| room.hotspots.len() == 3));
    assert!(!world.session.state.flag("powerOn"));
    assert_eq!(world.combinations.len(), 1);
}

#[test]
fn picking_up_the_flashlight_twice() {
    let mut world = shipped_world();
    let mut frontend = ScriptedFrontend::default();

    click(&mut world, &mut frontend, "desk");
    assert_eq!(items(&world), ["Flashlight (no batteries)"]);
    assert_eq!(latest(&world), "Added: Flashlight (no batteries)");

    click(&mut world, &mut frontend, "desk");
    assert_eq!(items(&world), ["Flashlight (no batteries)"]);
    assert_eq!(latest(&world), "Flashlight (no batteries) is already in inventory.");
}

#[test]
fn batteries_power_the_flashlight() {
    let mut world = shipped_world();
    let mut frontend = ScriptedFrontend::default();
    click(&mut world, &mut frontend, "desk");

    goto(&mut world, &mut frontend, WORKSHOP);
    frontend.type_line("213");
    click(&mut world, &mut frontend, "locker");

    assert_eq!(items(&world), ["Flashlight (powered)"]);
    assert!(world.session.state.flag("flashlightPowered"));
    assert_eq!(frontend.last_render(), Some(&["Flashlight (powered)".to_string()][..]));
    assert_eq!(latest(&world), "You fit the batteries into the flashlight. It is now powered.");

    // the unpowered flashlight can't be picked up again
    goto(&mut world, &mut frontend, STUDY);
    click(&mut world, &mut frontend, "desk");
    assert_eq!(items(&world), ["Flashlight (powered)"]);
    assert_eq!(latest(&world), "You already took the flashlight.");
}

#[test]
fn locker_codes() {
    let mut world = shipped_world();
    let mut frontend = ScriptedFrontend::default();
    goto(&mut world, &mut frontend, WORKSHOP);

    frontend.type_line(" 123 ");
    click(&mut world, &mut frontend, "locker");
    assert_eq!(latest(&world), "Wrong code.");
    assert!(items(&world).is_empty());

    frontend.type_line("312");
    click(&mut world, &mut frontend, "locker");
    assert_eq!(latest(&world), "You took batteries from the locker.");
    assert_eq!(items(&world), ["Batteries"]);
    assert_eq!(frontend.prompts_seen, ["Enter code:", "Enter code:"]);

    // opening it again adds nothing new
    frontend.type_line("213");
    click(&mut world, &mut frontend, "locker");
    assert_eq!(items(&world), ["Batteries"]);
}

#[test]
fn cancelling_the_locker_prompt() {
    let mut world = shipped_world();
    let mut frontend = ScriptedFrontend::default();
    goto(&mut world, &mut frontend, WORKSHOP);

    for dismissal in [Dismissal::Escape, Dismissal::OutsideClick, Dismissal::Confirm("  ".into())] {
        frontend.dismiss(dismissal);
        click(&mut world, &mut frontend, "locker");
        assert_eq!(latest(&world), "No entry.");
        assert!(!world.session.prompt.is_open());
    }
    assert!(items(&world).is_empty());
}

#[test]
fn breaker_powers_lamp_and_mirror() {
    let mut world = shipped_world();
    let mut frontend = ScriptedFrontend::default();

    click(&mut world, &mut frontend, "floor lamp");
    assert_eq!(latest(&world), "The lamp has no power. Maybe the breaker is off.");

    goto(&mut world, &mut frontend, WORKSHOP);
    click(&mut world, &mut frontend, "breaker");
    assert!(world.session.state.flag("powerOn"));
    assert_eq!(latest(&world), "You flipped the breaker: power on.");

    goto(&mut world, &mut frontend, VAULT);
    click(&mut world, &mut frontend, "mirror");
    assert_eq!(latest(&world), "The mirror reveals reversed letters: E L P P A");

    goto(&mut world, &mut frontend, WORKSHOP);
    click(&mut world, &mut frontend, "breaker");
    assert!(!world.session.state.flag("powerOn"));
    assert_eq!(latest(&world), "You flipped the breaker: power off.");
}

#[test]
fn poster_needs_the_powered_flashlight() {
    let mut world = shipped_world();
    let mut frontend = ScriptedFrontend::default();

    goto(&mut world, &mut frontend, LIBRARY);
    click(&mut world, &mut frontend, "poster");
    assert_eq!(latest(&world), "The poster is faded. Maybe a light would help.");

    goto(&mut world, &mut frontend, STUDY);
    click(&mut world, &mut frontend, "desk");
    goto(&mut world, &mut frontend, WORKSHOP);
    frontend.type_line("312");
    click(&mut world, &mut frontend, "locker");

    goto(&mut world, &mut frontend, LIBRARY);
    click(&mut world, &mut frontend, "poster");
    assert_eq!(latest(&world), "You shine the powered flashlight and see letters: A _ _ L E");
}

#[test]
fn final_chest() {
    let mut world = shipped_world();
    let mut frontend = ScriptedFrontend::default();
    goto(&mut world, &mut frontend, VAULT);

    frontend.type_line("appl");
    click(&mut world, &mut frontend, "final chest");
    assert_eq!(latest(&world), "The chest vibrates. Wrong word.");

    frontend.type_line("Apple ");
    click(&mut world, &mut frontend, "final chest");
    assert_eq!(latest(&world), "Chest opens! You escaped! 🎉");
    assert_eq!(frontend.prompts_seen, ["Enter 5-letter code:", "Enter 5-letter code:"]);
}

#[test]
fn navigation_wraps_through_every_room() {
    let mut world = shipped_world();
    let mut frontend = ScriptedFrontend::default();
    let mut seen = Vec::new();
    for _ in 0..world.room_count() {
        assert!(world.next_room(&mut frontend));
        seen.push(world.current_room().name.clone());
    }
    assert_eq!(seen, ["Workshop", "Library", "Vault", "Study"]);

    assert!(world.prev_room(&mut frontend));
    assert_eq!(world.current_room().name, "Vault");
}

#[test]
fn open_prompt_blocks_input() {
    let mut world = shipped_world();
    let mut frontend = ScriptedFrontend::default();
    world.session.prompt.open("Enter code:").unwrap();

    assert_eq!(world.click(&mut frontend, 0), ClickOutcome::Blocked);
    assert!(!world.next_room(&mut frontend));
    assert!(!world.prev_room(&mut frontend));
    assert_eq!(world.current_room().name, "Study");
    assert!(items(&world).is_empty());
}

#[test]
fn clicking_by_coordinates() {
    let mut world = shipped_world();
    let mut frontend = ScriptedFrontend::default();

    // desk is centered at (180, 300), 300x120
    assert!(world.click_at(&mut frontend, 180, 300).is_dispatched());
    assert_eq!(items(&world), ["Flashlight (no batteries)"]);

    assert!(world.click_at(&mut frontend, 700, 20).is_missing());
    assert_eq!(latest(&world), "There is nothing there.");
}

#[test]
fn entering_a_room_settles_leftover_parts() {
    let mut world = shipped_world();
    let mut frontend = ScriptedFrontend::default();
    world.session.state.add_item("Flashlight (no batteries)");
    world.session.state.add_item("Batteries");

    goto(&mut world, &mut frontend, LIBRARY);
    assert_eq!(items(&world), ["Flashlight (powered)"]);
    assert!(world.session.state.flag("flashlightPowered"));
}

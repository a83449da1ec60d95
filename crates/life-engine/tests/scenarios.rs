//! End-to-end scenarios driven purely through events.

use life_codec::{decode_save, encode_legacy_json, encode_save, SaveBuffer};
use life_core::{AlertLevel, Cell, Effect, Event, FileOperation};
use life_engine::{Core, CoreConfig};
use life_space::Camera;
use life_test_utils::{alerts, fixtures, is_render_only, render_count, shifted};

fn toggle_all(core: &mut Core, cells: &[Cell]) {
    for &cell in cells {
        assert!(is_render_only(&core.update(Event::ToggleCell(cell))));
    }
}

fn saved_bytes(effects: &[Effect]) -> Vec<u8> {
    match effects {
        [Effect::FileIO(FileOperation::Save(bytes)), Effect::Render] => bytes.clone(),
        other => panic!("expected save + render, got {other:?}"),
    }
}

#[test]
fn blinker_through_events() {
    let mut core = Core::default();
    toggle_all(&mut core, &fixtures::blinker());

    core.update(Event::Step);
    assert_eq!(core.grid().sorted_cells(), fixtures::blinker_vertical());
    core.update(Event::Step);
    assert_eq!(core.grid().sorted_cells(), fixtures::blinker());
    assert_eq!(core.generation(), 2);

    let view = core.view();
    assert_eq!(view.cells.len(), 3);
    assert_eq!(view.generation, 2);
}

#[test]
fn row_of_three_turns_vertical_around_its_middle() {
    let mut core = Core::default();
    toggle_all(
        &mut core,
        &[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
    );

    assert_eq!(core.update(Event::Step), vec![Effect::Render]);
    assert_eq!(
        core.grid().sorted_cells(),
        vec![Cell::new(-1, 1), Cell::new(0, 1), Cell::new(1, 1)]
    );
}

#[test]
fn glider_after_four_steps() {
    let mut core = Core::default();
    core.update(Event::SpawnGlider(Cell::new(5, 5)));
    for _ in 0..4 {
        core.update(Event::Step);
    }
    assert_eq!(
        core.grid().sorted_cells(),
        shifted(&fixtures::glider(), 6, 6)
    );
}

#[test]
fn tub_is_static() {
    let mut core = Core::default();
    toggle_all(&mut core, &fixtures::tub());
    for _ in 0..20 {
        core.update(Event::Step);
    }
    assert_eq!(core.grid().sorted_cells(), fixtures::tub());
}

#[test]
fn save_then_load_restores_world_and_camera() {
    let mut core = Core::default();
    toggle_all(&mut core, &fixtures::beehive());
    core.update(Event::CameraPanZoom {
        pan_x: -45.0,
        pan_y: 15.0,
        zoom: 2.0,
    });
    let bytes = saved_bytes(&core.update(Event::SaveWorld));

    let save = decode_save(&bytes).unwrap();
    assert_eq!(save.cells(), fixtures::beehive());
    assert_eq!(save.camera(), Some(Camera::new([-45.0, 15.0], 2.0)));

    let mut fresh = Core::default();
    assert!(is_render_only(&fresh.update(Event::LoadWorld(bytes))));
    assert_eq!(fresh.grid(), core.grid());
    assert_eq!(fresh.camera(), core.camera());
    assert_eq!(fresh.view(), core.view());
}

#[test]
fn save_is_deterministic_across_insertion_order() {
    let mut a = Core::default();
    let mut b = Core::default();
    let cells = fixtures::r_pentomino();
    toggle_all(&mut a, &cells);
    let mut reversed = cells.clone();
    reversed.reverse();
    toggle_all(&mut b, &reversed);
    assert_eq!(
        saved_bytes(&a.update(Event::SaveWorld)),
        saved_bytes(&b.update(Event::SaveWorld))
    );
}

#[test]
fn load_without_camera_keeps_camera() {
    let mut core = Core::default();
    core.update(Event::CameraPan { x: 10.0, y: 20.0 });
    let bytes = encode_save(&SaveBuffer::new(fixtures::block(), None));
    core.update(Event::LoadWorld(bytes));
    assert_eq!(core.camera().pan(), [10.0, 20.0]);
    assert_eq!(core.grid().sorted_cells(), fixtures::block());
}

#[test]
fn load_resets_generation() {
    let mut core = Core::default();
    toggle_all(&mut core, &fixtures::blinker());
    core.update(Event::Step);
    let json = encode_legacy_json(&fixtures::tub()).unwrap();
    core.update(Event::LoadWorld(json));
    assert_eq!(core.generation(), 0);
    assert_eq!(core.grid().sorted_cells(), fixtures::tub());
}

#[test]
fn corrupted_load_changes_nothing() {
    let mut core = Core::default();
    toggle_all(&mut core, &fixtures::glider());
    let before = core.view();

    let mut bytes = encode_save(&SaveBuffer::new(fixtures::block(), None));
    bytes.truncate(bytes.len() - 2);
    let effects = core.update(Event::LoadWorld(bytes));

    assert_eq!(effects.len(), 1);
    assert_eq!(render_count(&effects), 0);
    let alert = alerts(&effects)[0];
    assert_eq!(alert.level, AlertLevel::Error);
    assert!(alert.message.starts_with("load failed: unexpected end of buffer"));
    assert_eq!(core.view(), before);
}

#[test]
fn render_is_always_last() {
    let mut core = Core::default();
    let events = vec![
        Event::Increment,
        Event::ToggleCell(Cell::ORIGIN),
        Event::SaveWorld,
        Event::CopyWorld,
        Event::Render,
        Event::Step,
        Event::Clear,
    ];
    for event in events {
        let effects = core.update(event);
        let last = effects.len() - 1;
        for (i, effect) in effects.iter().enumerate() {
            assert_eq!(effect.is_render(), i == last);
        }
    }
}

#[test]
fn configured_initial_cells_are_live() {
    let core = Core::new(CoreConfig {
        initial_cells: fixtures::block(),
        viewport: [1080.0, 1920.0],
        ..Default::default()
    })
    .unwrap();
    assert_eq!(core.grid().len(), 4);
    assert_eq!(core.viewport().center(), [540.0, 960.0]);
}

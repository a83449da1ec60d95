//! Drive a core purely through the exported C ABI, as a foreign shell would.

use life_codec::{decode_effects, decode_view, encode_event};
use life_core::{Effect, Event, FileOperation};
use life_ffi::instance::{
    life_core_create, life_core_destroy, life_core_read_output, life_core_update, life_core_view,
};
use life_ffi::LifeStatus;
use life_test_utils::fixtures;

const OK: i32 = LifeStatus::Ok as i32;

struct Shell {
    handle: u64,
}

impl Shell {
    fn new() -> Self {
        let mut handle = 0;
        assert_eq!(life_core_create(&mut handle), OK);
        Self { handle }
    }

    fn take_output(&self, len: usize) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        let mut written = 0;
        assert_eq!(
            life_core_read_output(self.handle, buf.as_mut_ptr(), len, &mut written),
            OK
        );
        buf.truncate(written);
        buf
    }

    fn send(&self, event: Event) -> Vec<Effect> {
        let bytes = encode_event(&event);
        let mut len = 0;
        assert_eq!(
            life_core_update(self.handle, bytes.as_ptr(), bytes.len(), &mut len),
            OK
        );
        decode_effects(&self.take_output(len)).unwrap()
    }

    fn live_count(&self) -> u64 {
        let mut len = 0;
        assert_eq!(life_core_view(self.handle, &mut len), OK);
        decode_view(&self.take_output(len)).unwrap().live_count
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        life_core_destroy(self.handle);
    }
}

#[test]
fn save_in_one_core_load_in_another() {
    let a = Shell::new();
    for cell in fixtures::r_pentomino() {
        a.send(Event::ToggleCell(cell));
    }
    let saved = match a.send(Event::SaveWorld).as_slice() {
        [Effect::FileIO(FileOperation::Save(bytes)), Effect::Render] => bytes.clone(),
        other => panic!("unexpected {other:?}"),
    };

    let b = Shell::new();
    assert_eq!(b.send(Event::LoadWorld(saved)), vec![Effect::Render]);
    assert_eq!(b.live_count(), 5);

    for _ in 0..10 {
        a.send(Event::Step);
        b.send(Event::Step);
    }
    assert_eq!(a.live_count(), b.live_count());
}

#[test]
fn instances_are_independent() {
    let a = Shell::new();
    let b = Shell::new();
    a.send(Event::SpawnGlider(life_core::Cell::ORIGIN));
    assert_eq!(a.live_count(), 5);
    assert_eq!(b.live_count(), 0);
}

#[test]
fn stale_handle_is_rejected_everywhere() {
    let mut handle = 0;
    assert_eq!(life_core_create(&mut handle), OK);
    assert_eq!(life_core_destroy(handle), OK);

    let invalid = LifeStatus::InvalidHandle as i32;
    let mut len = 0;
    let event = encode_event(&Event::Step);
    assert_eq!(
        life_core_update(handle, event.as_ptr(), event.len(), &mut len),
        invalid
    );
    assert_eq!(life_core_view(handle, &mut len), invalid);
    let mut buf = [0u8; 8];
    assert_eq!(
        life_core_read_output(handle, buf.as_mut_ptr(), buf.len(), &mut len),
        invalid
    );
}

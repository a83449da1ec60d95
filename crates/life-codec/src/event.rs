//! Event encoding: `[WIRE_VERSION] [tag] [payload]`.

use life_core::{DecodeError, DecodeErrorKind, Event};

use crate::codec::*;
use crate::WIRE_VERSION;

/// Event tag: [`Event::Increment`].
pub const TAG_INCREMENT: u8 = 0x00;
/// Event tag: [`Event::Decrement`].
pub const TAG_DECREMENT: u8 = 0x01;
/// Event tag: [`Event::Step`].
pub const TAG_STEP: u8 = 0x02;
/// Event tag: [`Event::ToggleCell`].
pub const TAG_TOGGLE_CELL: u8 = 0x03;
/// Event tag: [`Event::ToggleScreenCoord`].
pub const TAG_TOGGLE_SCREEN_COORD: u8 = 0x04;
/// Event tag: [`Event::CameraPanZoom`].
pub const TAG_CAMERA_PAN_ZOOM: u8 = 0x05;
/// Event tag: [`Event::CameraSize`].
pub const TAG_CAMERA_SIZE: u8 = 0x06;
/// Event tag: [`Event::SaveWorld`].
pub const TAG_SAVE_WORLD: u8 = 0x07;
/// Event tag: [`Event::LoadWorld`].
pub const TAG_LOAD_WORLD: u8 = 0x08;
/// Event tag: [`Event::Echo`].
pub const TAG_ECHO: u8 = 0x09;
/// Event tag: [`Event::Render`].
pub const TAG_RENDER: u8 = 0x0a;
/// Event tag: [`Event::SpawnGlider`].
pub const TAG_SPAWN_GLIDER: u8 = 0x0b;
/// Event tag: [`Event::CopyWorld`].
pub const TAG_COPY_WORLD: u8 = 0x0c;
/// Event tag: [`Event::CameraPan`].
pub const TAG_CAMERA_PAN: u8 = 0x0d;
/// Event tag: [`Event::ChangeZoom`].
pub const TAG_CHANGE_ZOOM: u8 = 0x0e;
/// Event tag: [`Event::AnchorDrag`].
pub const TAG_ANCHOR_DRAG: u8 = 0x0f;
/// Event tag: [`Event::ChangePanZoom`].
pub const TAG_CHANGE_PAN_ZOOM: u8 = 0x10;
/// Event tag: [`Event::Clear`].
pub const TAG_CLEAR: u8 = 0x11;

/// Encode one event into a fresh buffer.
pub fn encode_event(event: &Event) -> Vec<u8> {
    let mut buf = Vec::with_capacity(32);
    write_u8(&mut buf, WIRE_VERSION);
    write_event(&mut buf, event);
    buf
}

/// Append the tag and payload of `event` (no version byte).
pub fn write_event(buf: &mut Vec<u8>, event: &Event) {
    match event {
        Event::Increment => write_u8(buf, TAG_INCREMENT),
        Event::Decrement => write_u8(buf, TAG_DECREMENT),
        Event::Step => write_u8(buf, TAG_STEP),
        Event::ToggleCell(cell) => {
            write_u8(buf, TAG_TOGGLE_CELL);
            write_cell(buf, *cell);
        }
        Event::ToggleScreenCoord { x, y } => {
            write_u8(buf, TAG_TOGGLE_SCREEN_COORD);
            write_f64_pair(buf, [*x, *y]);
        }
        Event::CameraPanZoom { pan_x, pan_y, zoom } => {
            write_u8(buf, TAG_CAMERA_PAN_ZOOM);
            write_f64_pair(buf, [*pan_x, *pan_y]);
            write_f64_le(buf, *zoom);
        }
        Event::CameraSize { width, height } => {
            write_u8(buf, TAG_CAMERA_SIZE);
            write_f64_pair(buf, [*width, *height]);
        }
        Event::SaveWorld => write_u8(buf, TAG_SAVE_WORLD),
        Event::LoadWorld(bytes) => {
            write_u8(buf, TAG_LOAD_WORLD);
            write_length_prefixed_bytes(buf, bytes);
        }
        Event::Echo(msg) => {
            write_u8(buf, TAG_ECHO);
            write_length_prefixed_str(buf, msg);
        }
        Event::Render => write_u8(buf, TAG_RENDER),
        Event::SpawnGlider(cell) => {
            write_u8(buf, TAG_SPAWN_GLIDER);
            write_cell(buf, *cell);
        }
        Event::CopyWorld => write_u8(buf, TAG_COPY_WORLD),
        Event::CameraPan { x, y } => {
            write_u8(buf, TAG_CAMERA_PAN);
            write_f64_pair(buf, [*x, *y]);
        }
        Event::ChangeZoom { factor } => {
            write_u8(buf, TAG_CHANGE_ZOOM);
            write_f64_le(buf, *factor);
        }
        Event::AnchorDrag { x, y } => {
            write_u8(buf, TAG_ANCHOR_DRAG);
            write_f64_pair(buf, [*x, *y]);
        }
        Event::ChangePanZoom { x, y, factor } => {
            write_u8(buf, TAG_CHANGE_PAN_ZOOM);
            write_f64_pair(buf, [*x, *y]);
            write_f64_le(buf, *factor);
        }
        Event::Clear => write_u8(buf, TAG_CLEAR),
    }
}

/// Decode one event. The buffer must contain exactly one encoded event.
pub fn decode_event(buf: &[u8]) -> Result<Event, DecodeError> {
    let mut r = Reader::new(buf);
    r.expect_version(WIRE_VERSION)?;
    let event = read_event(&mut r)?;
    r.finish()?;
    Ok(event)
}

/// Read the tag and payload of one event (no version byte).
pub fn read_event(r: &mut Reader<'_>) -> Result<Event, DecodeError> {
    let at = r.position();
    let tag = r.read_u8()?;
    let event = match tag {
        TAG_INCREMENT => Event::Increment,
        TAG_DECREMENT => Event::Decrement,
        TAG_STEP => Event::Step,
        TAG_TOGGLE_CELL => Event::ToggleCell(r.read_cell()?),
        TAG_TOGGLE_SCREEN_COORD => {
            let [x, y] = r.read_f64_pair()?;
            Event::ToggleScreenCoord { x, y }
        }
        TAG_CAMERA_PAN_ZOOM => {
            let [pan_x, pan_y] = r.read_f64_pair()?;
            let zoom = r.read_f64_le()?;
            Event::CameraPanZoom { pan_x, pan_y, zoom }
        }
        TAG_CAMERA_SIZE => {
            let [width, height] = r.read_f64_pair()?;
            Event::CameraSize { width, height }
        }
        TAG_SAVE_WORLD => Event::SaveWorld,
        TAG_LOAD_WORLD => Event::LoadWorld(r.read_length_prefixed_bytes()?),
        TAG_ECHO => Event::Echo(r.read_length_prefixed_str()?),
        TAG_RENDER => Event::Render,
        TAG_SPAWN_GLIDER => Event::SpawnGlider(r.read_cell()?),
        TAG_COPY_WORLD => Event::CopyWorld,
        TAG_CAMERA_PAN => {
            let [x, y] = r.read_f64_pair()?;
            Event::CameraPan { x, y }
        }
        TAG_CHANGE_ZOOM => Event::ChangeZoom {
            factor: r.read_f64_le()?,
        },
        TAG_ANCHOR_DRAG => {
            let [x, y] = r.read_f64_pair()?;
            Event::AnchorDrag { x, y }
        }
        TAG_CHANGE_PAN_ZOOM => {
            let [x, y] = r.read_f64_pair()?;
            let factor = r.read_f64_le()?;
            Event::ChangePanZoom { x, y, factor }
        }
        TAG_CLEAR => Event::Clear,
        other => {
            return Err(DecodeError::new(
                at,
                DecodeErrorKind::UnknownTag {
                    what: "event",
                    tag: other,
                },
            ))
        }
    };
    Ok(event)
}

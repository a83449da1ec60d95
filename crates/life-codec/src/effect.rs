//! Effect list encoding: `[WIRE_VERSION] [count u32] ([tag] [payload])*`.

use life_core::{Alert, AlertLevel, DecodeError, DecodeErrorKind, Effect, FileOperation};

use crate::codec::*;
use crate::WIRE_VERSION;

const TAG_RENDER: u8 = 0;
const TAG_ALERT: u8 = 1;
const TAG_FILE_IO: u8 = 2;

const LEVEL_INFO: u8 = 0;
const LEVEL_WARNING: u8 = 1;
const LEVEL_ERROR: u8 = 2;

const OP_SAVE: u8 = 0;
const OP_COPY: u8 = 1;

/// Encode the ordered effects produced by one update.
pub fn encode_effects(effects: &[Effect]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(8 + effects.len() * 16);
    write_u8(&mut buf, WIRE_VERSION);
    write_len(&mut buf, effects.len());
    for effect in effects {
        write_effect(&mut buf, effect);
    }
    buf
}

/// Decode an effect list produced by [`encode_effects`].
pub fn decode_effects(buf: &[u8]) -> Result<Vec<Effect>, DecodeError> {
    let mut r = Reader::new(buf);
    r.expect_version(WIRE_VERSION)?;
    // Smallest effect is a bare Render tag.
    let (count, hint) = r.read_count(1)?;
    let mut effects = Vec::with_capacity(hint);
    for _ in 0..count {
        effects.push(read_effect(&mut r)?);
    }
    r.finish()?;
    Ok(effects)
}

/// Encode a single effect, with its own version byte.
pub fn encode_effect(effect: &Effect) -> Vec<u8> {
    let mut buf = Vec::with_capacity(16);
    write_u8(&mut buf, WIRE_VERSION);
    write_effect(&mut buf, effect);
    buf
}

/// Decode a single effect produced by [`encode_effect`].
pub fn decode_effect(buf: &[u8]) -> Result<Effect, DecodeError> {
    let mut r = Reader::new(buf);
    r.expect_version(WIRE_VERSION)?;
    let effect = read_effect(&mut r)?;
    r.finish()?;
    Ok(effect)
}

fn write_effect(buf: &mut Vec<u8>, effect: &Effect) {
    match effect {
        Effect::Render => write_u8(buf, TAG_RENDER),
        Effect::Alert(alert) => {
            write_u8(buf, TAG_ALERT);
            write_u8(
                buf,
                match alert.level {
                    AlertLevel::Info => LEVEL_INFO,
                    AlertLevel::Warning => LEVEL_WARNING,
                    AlertLevel::Error => LEVEL_ERROR,
                },
            );
            write_length_prefixed_str(buf, &alert.message);
        }
        Effect::FileIO(op) => {
            write_u8(buf, TAG_FILE_IO);
            match op {
                FileOperation::Save(bytes) => {
                    write_u8(buf, OP_SAVE);
                    write_length_prefixed_bytes(buf, bytes);
                }
                FileOperation::Copy(bytes) => {
                    write_u8(buf, OP_COPY);
                    write_length_prefixed_bytes(buf, bytes);
                }
            }
        }
    }
}

fn read_effect(r: &mut Reader<'_>) -> Result<Effect, DecodeError> {
    let at = r.position();
    match r.read_u8()? {
        TAG_RENDER => Ok(Effect::Render),
        TAG_ALERT => {
            let at = r.position();
            let level = match r.read_u8()? {
                LEVEL_INFO => AlertLevel::Info,
                LEVEL_WARNING => AlertLevel::Warning,
                LEVEL_ERROR => AlertLevel::Error,
                tag => return Err(unknown(at, "alert level", tag)),
            };
            let message = r.read_length_prefixed_str()?;
            Ok(Effect::Alert(Alert { level, message }))
        }
        TAG_FILE_IO => {
            let at = r.position();
            let op = r.read_u8()?;
            let bytes = r.read_length_prefixed_bytes()?;
            match op {
                OP_SAVE => Ok(Effect::FileIO(FileOperation::Save(bytes))),
                OP_COPY => Ok(Effect::FileIO(FileOperation::Copy(bytes))),
                tag => Err(unknown(at, "file operation", tag)),
            }
        }
        tag => Err(unknown(at, "effect", tag)),
    }
}

fn unknown(offset: usize, what: &'static str, tag: u8) -> DecodeError {
    DecodeError::new(offset, DecodeErrorKind::UnknownTag { what, tag })
}

//! Compressed save files for batches of SOD states.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::KestrelError;
use crate::sod::{SodCurve, SodState};

pub const SNAPSHOT_VERSION: u32 = 1;

/// A curve and the states it drives, as written to disk.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SodSnapshot<T> {
    pub version: u32,
    pub curve: SodCurve,
    pub states: Vec<SodState<T>>,
}

impl<T> SodSnapshot<T> {
    pub fn new(curve: SodCurve, states: Vec<SodState<T>>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            curve,
            states,
        }
    }
}

pub fn save_snapshot<T: Serialize>(path: impl AsRef<Path>, snapshot: &SodSnapshot<T>) -> Result<(), KestrelError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_compressed(BufWriter::new(file), snapshot)?;
    info!("Saved {} SOD states to {}", snapshot.states.len(), path.display());
    Ok(())
}

pub fn load_snapshot<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<SodSnapshot<T>, KestrelError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let snapshot: SodSnapshot<T> = read_compressed(BufReader::new(file))?;
    info!("Loaded {} SOD states from {}", snapshot.states.len(), path.display());
    Ok(snapshot)
}

pub fn to_bytes<T: Serialize>(snapshot: &SodSnapshot<T>) -> Result<Vec<u8>, KestrelError> {
    write_compressed(Vec::new(), snapshot)
}

pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<SodSnapshot<T>, KestrelError> {
    read_compressed(bytes)
}

fn write_compressed<W: Write, T: Serialize>(writer: W, snapshot: &SodSnapshot<T>) -> Result<W, KestrelError> {
    let mut encoder = ZlibEncoder::new(writer, Compression::default());
    bincode::serialize_into(&mut encoder, snapshot)?;
    let mut writer = encoder.finish()?;
    writer.flush()?;
    Ok(writer)
}

fn read_compressed<R: Read, T: DeserializeOwned>(reader: R) -> Result<SodSnapshot<T>, KestrelError> {
    let mut decoder = ZlibDecoder::new(reader);
    let snapshot: SodSnapshot<T> = bincode::deserialize_from(&mut decoder)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(KestrelError::SnapshotVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    Ok(snapshot)
}

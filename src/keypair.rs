use std::path::Path;

use solana_sdk::signature::{read_keypair_file, Keypair};

use crate::error::{ClientError, ClientResult};

/// Read the keypair the program was deployed with. The file holds the
/// 64-byte secret key as a JSON array of numbers.
pub fn load_program_keypair(path: impl AsRef<Path>) -> ClientResult<Keypair> {
    let path = path.as_ref();

    read_keypair_file(path).map_err(|e| ClientError::KeypairFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

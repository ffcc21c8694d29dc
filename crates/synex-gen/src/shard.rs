use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::{GenError, GenResult};

/// Largest top-level shard directory name (inclusive).
const TOP_MAX: u32 = 999;

/// Exclusive bound on second-level shard directory names.
const SUB_BOUND: u32 = 100;

/// Pick a random two-level shard directory under `root` and make sure it
/// exists.
///
/// The top component is drawn uniformly from `[0, 999]`, the sub component
/// from `[0, 100)`. Each draw is independent; occupancy is only
/// approximately even, which is all the target layout guarantees too.
/// Creation is idempotent — resolving an existing shard again is a no-op.
pub fn resolve_shard<R: Rng>(rng: &mut R, root: &Path) -> GenResult<PathBuf> {
    let top = rng.gen_range(0..=TOP_MAX);
    let sub = rng.gen_range(0..SUB_BOUND);
    let path = root.join(top.to_string()).join(sub.to_string());
    fs::create_dir_all(&path).map_err(|source| GenError::CreateDir {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn components_stay_within_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..500 {
            let shard = resolve_shard(&mut rng, dir.path()).unwrap();
            let sub: u32 = shard.file_name().unwrap().to_str().unwrap().parse().unwrap();
            let top: u32 = shard
                .parent()
                .unwrap()
                .file_name()
                .unwrap()
                .to_str()
                .unwrap()
                .parse()
                .unwrap();
            assert!(top <= 999, "top {top} out of range");
            assert!(sub < 100, "sub {sub} out of range");
            assert!(shard.is_dir());
        }
    }

    #[test]
    fn resolving_twice_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        // Same seed twice: identical draws, second resolve hits the
        // already-created directory.
        let first = resolve_shard(&mut StdRng::seed_from_u64(7), dir.path()).unwrap();
        std::fs::write(first.join("marker"), b"x").unwrap();
        let second = resolve_shard(&mut StdRng::seed_from_u64(7), dir.path()).unwrap();
        assert_eq!(first, second);
        assert!(second.join("marker").is_file());
    }

    #[test]
    fn collision_with_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // Pre-create the top component as a regular file.
        let mut probe = StdRng::seed_from_u64(3);
        let top = probe.gen_range(0..=TOP_MAX);
        std::fs::write(dir.path().join(top.to_string()), b"in the way").unwrap();

        let err = resolve_shard(&mut StdRng::seed_from_u64(3), dir.path()).unwrap_err();
        assert!(matches!(err, GenError::CreateDir { .. }));
    }
}

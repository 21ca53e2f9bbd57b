use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Cached path to the directory holding the bundled game descriptions.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

const ENGINE_DATA: &str = "trek_engine/data";

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

fn detect_data_root() -> PathBuf {
    let mut bases = vec![PathBuf::new()];
    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        bases.push(dir.to_path_buf());
        if let Some(parent) = dir.parent() {
            bases.push(parent.to_path_buf());
        }
    }

    candidates(&bases)
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from(ENGINE_DATA))
}

/// Workspace layout first, then a flattened `data/`, for each base directory in turn.
fn candidates(bases: &[PathBuf]) -> Vec<PathBuf> {
    bases
        .iter()
        .flat_map(|base| [base.join(ENGINE_DATA), base.join("data")])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_prefer_workspace_layout() {
        let found = candidates(&[PathBuf::new(), PathBuf::from("/opt/trek")]);
        assert_eq!(
            found,
            [
                PathBuf::from("trek_engine/data"),
                PathBuf::from("data"),
                PathBuf::from("/opt/trek/trek_engine/data"),
                PathBuf::from("/opt/trek/data"),
            ]
        );
    }
}

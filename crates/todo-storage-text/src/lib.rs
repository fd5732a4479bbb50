use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use todo_domain::CategoryKey;
use todo_services::{storage::PlanStorage, CoreError};

const PLAN_EXTENSION: &str = "txt";
const PLAN_FILE_PREFIX: &str = "plans_";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed line-oriented persistence, one file per category.
#[derive(Debug, Clone)]
pub struct TextPlanStorage {
    plans_dir: PathBuf,
}

impl TextPlanStorage {
    /// Creates the storage, making sure `plans_dir` exists.
    pub fn new(plans_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&plans_dir)?;
        Ok(Self { plans_dir })
    }

    pub fn plans_dir(&self) -> &Path {
        &self.plans_dir
    }
}

impl PlanStorage for TextPlanStorage {
    fn load_lines(&self, key: CategoryKey) -> Result<Vec<String>, CoreError> {
        load_lines_from_path(&self.plan_path(key)).map_err(|err| storage_error(key, err))
    }

    fn save_lines(&self, key: CategoryKey, lines: &[String]) -> Result<(), CoreError> {
        save_lines_to_path(lines, &self.plan_path(key)).map_err(|err| storage_error(key, err))
    }

    fn plan_path(&self, key: CategoryKey) -> PathBuf {
        self.plans_dir.join(format!(
            "{}{}.{}",
            PLAN_FILE_PREFIX,
            key.slug(),
            PLAN_EXTENSION
        ))
    }
}

/// Reads non-empty trimmed lines in file order. A missing file is an empty list.
pub fn load_lines_from_path(path: &Path) -> io::Result<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path)?;
    Ok(clean_lines(&data))
}

/// Overwrites `path` with one newline-terminated line per entry.
pub fn save_lines_to_path(lines: &[String], path: &Path) -> io::Result<()> {
    let mut data = String::new();
    for line in lines {
        data.push_str(line);
        data.push('\n');
    }
    let tmp = tmp_path(path);
    write_atomic(&tmp, &data)?;
    fs::rename(&tmp, path)
}

pub fn clean_lines(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn storage_error(key: CategoryKey, err: io::Error) -> CoreError {
    CoreError::Storage {
        key,
        message: err.to_string(),
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use std::error::Error;
use std::fs;
use std::path::Path;

static PASSAGE_DIR: Dir = include_dir!("src/passages");

const DEFAULT_RESOURCE: &str = "default.txt";

/// Pool of sample passages the user can be asked to retype.
///
/// Passages are blank-line-separated blocks of text; newlines inside a block
/// are folded into single spaces so every passage is a flat string.
#[derive(Clone, Debug)]
pub struct PassagePool {
    passages: Vec<String>,
}

impl PassagePool {
    /// Load the pool embedded in the binary.
    pub fn embedded() -> Result<Self, Box<dyn Error>> {
        let file = PASSAGE_DIR
            .get_file(DEFAULT_RESOURCE)
            .ok_or("embedded passage resource not found")?;

        let text = file
            .contents_utf8()
            .ok_or("embedded passage resource is not valid utf-8")?;

        Self::from_text(text)
    }

    /// Load a pool from a user-supplied passage file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_text(&text)
    }

    /// Split `text` on blank lines into individual passages.
    pub fn from_text(text: &str) -> Result<Self, Box<dyn Error>> {
        let passages: Vec<String> = text
            .split("\n\n")
            .map(|block| block.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|p| !p.is_empty())
            .collect();

        if passages.is_empty() {
            return Err("passage pool is empty".into());
        }

        Ok(Self { passages })
    }

    /// Uniform random choice from the pool.
    pub fn pick_random(&self) -> &str {
        let mut rng = rand::thread_rng();
        self.passages
            .choose(&mut rng)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn passages(&self) -> &[String] {
        &self.passages
    }
}

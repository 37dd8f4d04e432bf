//! Dialogue lookup
//!
//! Dialogue files map a key to a line of text and its labelled choices.
//! Choices name the key of the follow-up line; following them is up to
//! the caller.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single line of dialogue
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueNode {
    pub text: String,
    /// Choice label -> key of the next node
    pub choices: BTreeMap<String, String>,
}

/// Flat key -> node lookup
#[derive(Debug, Clone, Default)]
pub struct DialogueManager {
    dialogues: HashMap<String, DialogueNode>,
}

impl DialogueManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all dialogue with the contents of a JSON document
    pub fn load_from_str(&mut self, json: &str) -> Result<()> {
        self.dialogues = serde_json::from_str(json)?;
        log::info!("Loaded {} dialogue nodes", self.dialogues.len());
        Ok(())
    }

    /// Replace all dialogue with the contents of a JSON file
    pub fn load_from_path(&mut self, path: &Path) -> Result<()> {
        self.load_from_str(&fs::read_to_string(path)?)
    }

    pub fn get(&self, key: &str) -> Option<&DialogueNode> {
        self.dialogues.get(key)
    }

    pub fn len(&self) -> usize {
        self.dialogues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogues.is_empty()
    }
}

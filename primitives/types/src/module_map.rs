//! Ordered module map.
//!
//! The map is the unit of output of every generation step: modules are kept
//! in insertion order and no two entries share a path. What happens when a
//! second module arrives for a path that is already present is decided by the
//! map's [`DuplicatePolicy`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::GeneratedModule;

/// Errors raised by [`ModuleMap`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleMapError {
    /// A module was set for a path that already exists under [`DuplicatePolicy::Reject`].
    #[error("module '{0}' already exists in the module map")]
    DuplicatePath(String),
    /// The requested path is not in the map.
    #[error("module '{0}' not found in the module map")]
    NotFound(String),
}

/// Behaviour of [`ModuleMap::set`] for a path that is already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with [`ModuleMapError::DuplicatePath`] and leave the map untouched.
    #[default]
    Reject,
    /// Log a warning and replace the content, keeping the original position.
    Overwrite,
}

/// Ordered mapping from output path to [`GeneratedModule`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleMap {
    modules: Vec<GeneratedModule>,
    index: HashMap<String, usize>,
    policy: DuplicatePolicy,
}

impl ModuleMap {
    /// Create an empty map that rejects duplicate paths.
    pub fn new() -> Self { Self::default() }

    /// Create an empty map with the given duplicate-path policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self { Self { policy, ..Self::default() } }

    /// The duplicate-path policy of this map.
    pub fn policy(&self) -> DuplicatePolicy { self.policy }

    /// Insert a module.
    ///
    /// New paths are appended. An existing path is handled according to the
    /// map's policy; on rejection the map is left unchanged.
    pub fn set(&mut self, module: GeneratedModule) -> Result<(), ModuleMapError> {
        match self.index.get(&module.path) {
            None => {
                self.index.insert(module.path.clone(), self.modules.len());
                self.modules.push(module);
                Ok(())
            }
            Some(&position) => match self.policy {
                DuplicatePolicy::Reject => Err(ModuleMapError::DuplicatePath(module.path)),
                DuplicatePolicy::Overwrite => {
                    logging::warn(
                        "module_map",
                        &format!("Module {} already exists. Overwriting...", module.path),
                    );
                    self.modules[position] = module;
                    Ok(())
                }
            },
        }
    }

    /// Get the module stored at `path`.
    pub fn get(&self, path: &str) -> Option<&GeneratedModule> {
        self.index.get(path).map(|&position| &self.modules[position])
    }

    /// Whether a module is stored at `path`.
    pub fn contains(&self, path: &str) -> bool { self.index.contains_key(path) }

    /// Number of modules in the map.
    pub fn len(&self) -> usize { self.modules.len() }

    /// Whether the map holds no modules.
    pub fn is_empty(&self) -> bool { self.modules.is_empty() }

    /// All modules in insertion order.
    pub fn modules(&self) -> &[GeneratedModule] { &self.modules }

    /// All paths in insertion order.
    pub fn paths(&self) -> Vec<&str> { self.modules.iter().map(|m| m.path.as_str()).collect() }

    /// Iterate over the modules in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, GeneratedModule> { self.modules.iter() }

    /// Set every module of `other`, in its order, under this map's policy.
    ///
    /// Stops at the first rejected module; modules set before it stay in the map.
    pub fn merge(&mut self, other: ModuleMap) -> Result<(), ModuleMapError> {
        other.into_iter().try_for_each(|module| self.set(module))
    }

    /// Merge several maps in order.
    pub fn merge_many(
        &mut self,
        others: impl IntoIterator<Item = ModuleMap>,
    ) -> Result<(), ModuleMapError> {
        others.into_iter().try_for_each(|other| self.merge(other))
    }

    /// Replace the module at `old_path` with `module`, keeping its position.
    ///
    /// The new module may carry a different path, as long as that path is not
    /// already used by another entry.
    pub fn replace(
        &mut self,
        old_path: &str,
        module: GeneratedModule,
    ) -> Result<(), ModuleMapError> {
        let position = *self
            .index
            .get(old_path)
            .ok_or_else(|| ModuleMapError::NotFound(old_path.to_string()))?;

        if module.path != old_path && self.index.contains_key(&module.path) {
            return Err(ModuleMapError::DuplicatePath(module.path));
        }

        self.index.remove(old_path);
        self.index.insert(module.path.clone(), position);
        self.modules[position] = module;
        Ok(())
    }

    /// Remove and return the module at `path`.
    pub fn remove(&mut self, path: &str) -> Option<GeneratedModule> {
        let position = self.index.remove(path)?;
        let module = self.modules.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(module)
    }
}

impl IntoIterator for ModuleMap {
    type Item = GeneratedModule;
    type IntoIter = std::vec::IntoIter<GeneratedModule>;

    fn into_iter(self) -> Self::IntoIter { self.modules.into_iter() }
}

impl<'a> IntoIterator for &'a ModuleMap {
    type Item = &'a GeneratedModule;
    type IntoIter = std::slice::Iter<'a, GeneratedModule>;

    fn into_iter(self) -> Self::IntoIter { self.modules.iter() }
}

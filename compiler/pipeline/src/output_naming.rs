//! Output file names that stay unique across one plugin run.
//!
//! Naming policies other than `FullPath` can map two proto files onto the same output name.
//! The first file keeps the canonical name; later ones get a counter spliced in front of the
//! component marker (`lightning.zap.swift`, `lightning.1.zap.swift`, ...). A counter that
//! lands on a name already handed out is skipped, so decorated names never shadow a later
//! file's canonical name either.

use std::collections::{HashMap, HashSet};

use path::{output_file_name, FileNaming};

/// Tracks every output name handed out during a run.
#[derive(Debug, Clone)]
pub struct UniqueFileNameTable {
    component: String,
    naming: FileNaming,
    next_counter: HashMap<String, usize>,
    emitted: HashSet<String>,
}

impl UniqueFileNameTable {
    /// Create an empty table for one run.
    pub fn new(component: impl Into<String>, naming: FileNaming) -> Self {
        Self {
            component: component.into(),
            naming,
            next_counter: HashMap::new(),
            emitted: HashSet::new(),
        }
    }

    /// Output name for the proto file `proto_name`, unique among all names claimed so far.
    pub fn claim(&mut self, proto_name: &str) -> String {
        let canonical = output_file_name(&self.component, proto_name, self.naming);
        let mut name = canonical.clone();
        let counter = self.next_counter.entry(canonical).or_insert(1);
        while self.emitted.contains(&name) {
            let component = format!("{}.{}", counter, self.component);
            name = output_file_name(&component, proto_name, self.naming);
            *counter += 1;
        }
        self.emitted.insert(name.clone());
        name
    }

    /// Number of names handed out
    pub fn len(&self) -> usize { self.emitted.len() }

    /// Whether no name has been claimed yet
    pub fn is_empty(&self) -> bool { self.emitted.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_path_names_do_not_collide() {
        let mut table = UniqueFileNameTable::new("zap", FileNaming::FullPath);
        assert_eq!(table.claim("lnrpc/lightning.proto"), "lnrpc/lightning.zap.swift");
        assert_eq!(table.claim("walletrpc/lightning.proto"), "walletrpc/lightning.zap.swift");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_drop_path_collisions_get_counters() {
        let mut table = UniqueFileNameTable::new("zap", FileNaming::DropPath);
        assert!(table.is_empty());
        assert_eq!(table.claim("a/lightning.proto"), "lightning.zap.swift");
        assert_eq!(table.claim("b/lightning.proto"), "lightning.1.zap.swift");
        assert_eq!(table.claim("c/lightning.proto"), "lightning.2.zap.swift");
        assert_eq!(table.claim("router.proto"), "router.zap.swift");
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_decorated_name_is_not_reused_by_canonical_name() {
        let mut table = UniqueFileNameTable::new("zap", FileNaming::DropPath);
        let names = [
            table.claim("a/x.proto"),
            table.claim("b/x.proto"),
            table.claim("x.1.proto"),
            table.claim("c/x.proto"),
        ];
        assert_eq!(names, ["x.zap.swift", "x.1.zap.swift", "x.1.1.zap.swift", "x.2.zap.swift"]);

        let distinct: HashSet<_> = names.iter().collect();
        assert_eq!(distinct.len(), names.len());
    }

    #[test]
    fn test_counter_skips_names_already_taken() {
        let mut table = UniqueFileNameTable::new("zap", FileNaming::DropPath);
        assert_eq!(table.claim("x.1.proto"), "x.1.zap.swift");
        assert_eq!(table.claim("a/x.proto"), "x.zap.swift");
        assert_eq!(table.claim("b/x.proto"), "x.2.zap.swift");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_underscore_policy_and_component() {
        let mut table = UniqueFileNameTable::new("client", FileNaming::PathToUnderscores);
        assert_eq!(table.claim("lnrpc/v1/lightning.proto"), "lnrpc_v1_lightning.client.swift");
        assert_eq!(table.claim("lnrpc/v1/lightning.proto"), "lnrpc_v1_lightning.1.client.swift");
    }
}

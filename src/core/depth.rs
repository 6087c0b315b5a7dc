//! Dependency depth calculation
//!
//! `depth(m)` is 0 for a module without internal dependencies and otherwise
//! one more than the deepest of its dependencies. Every key of the edge map
//! and every module reachable from one gets an entry.
//!
//! A module is marked visited before its dependencies are explored. Reaching
//! it again while it is still being computed (a cycle) reads its current
//! memoized value, 0 until it finishes, so depths across a cycle edge may be
//! under-counted but the walk always terminates.

use crate::models::dependency_graph::EdgeMap;
use std::collections::{BTreeMap, HashMap, HashSet};

struct Frame<'a> {
    module: &'a str,
    next: usize,
    deepest: usize,
}

/// Compute the dependency depth of every module reachable in `edges`
pub fn calculate_depths(edges: &EdgeMap) -> BTreeMap<String, usize> {
    let mut depths: HashMap<&str, usize> = HashMap::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<Frame> = Vec::new();

    for root in edges.keys() {
        if !visited.insert(root.as_str()) {
            continue;
        }
        stack.push(Frame {
            module: root,
            next: 0,
            deepest: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let targets = edges.get(frame.module).map(Vec::as_slice).unwrap_or(&[]);

            if let Some(target) = targets.get(frame.next) {
                frame.next += 1;
                let target = target.as_str();

                if visited.insert(target) {
                    stack.push(Frame {
                        module: target,
                        next: 0,
                        deepest: 0,
                    });
                } else {
                    let known = depths.get(target).copied().unwrap_or(0);
                    frame.deepest = frame.deepest.max(known);
                }
                continue;
            }

            let depth = if targets.is_empty() { 0 } else { frame.deepest + 1 };
            depths.insert(frame.module, depth);
            stack.pop();

            if let Some(parent) = stack.last_mut() {
                parent.deepest = parent.deepest.max(depth);
            }
        }
    }

    depths
        .into_iter()
        .map(|(module, depth)| (module.to_string(), depth))
        .collect()
}

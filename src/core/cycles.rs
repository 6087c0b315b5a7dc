//! Circular dependency detection
//!
//! Depth-first search over the internal edges, driven by an explicit stack
//! so long import chains cannot exhaust the call stack. Targets that are not
//! keys of the edge map have no outgoing edges and are not walked.
//!
//! Meeting a module that is still on the stack records the stack from that
//! module onwards, closed with the module again. Finished modules are never
//! re-entered, and the same cycle may be reported again when it is reached
//! from another root.

use crate::models::dependency_graph::EdgeMap;
use std::collections::HashSet;

struct Frame<'a> {
    module: &'a str,
    next: usize,
}

/// Find cycles in an internal edge map
pub fn detect_cycles(edges: &EdgeMap) -> Vec<Vec<String>> {
    let mut cycles = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut on_stack: HashSet<&str> = HashSet::new();
    let mut stack: Vec<Frame> = Vec::new();

    for root in edges.keys() {
        if visited.contains(root.as_str()) {
            continue;
        }

        visited.insert(root);
        on_stack.insert(root);
        stack.push(Frame { module: root, next: 0 });

        while let Some(frame) = stack.last_mut() {
            let targets = edges.get(frame.module).map(Vec::as_slice).unwrap_or(&[]);

            let Some(target) = targets.get(frame.next) else {
                on_stack.remove(frame.module);
                stack.pop();
                continue;
            };
            frame.next += 1;

            let target = target.as_str();
            if !edges.contains_key(target) {
                continue;
            }

            if on_stack.contains(target) {
                let start = stack
                    .iter()
                    .position(|f| f.module == target)
                    .unwrap_or(0);
                let mut cycle: Vec<String> =
                    stack[start..].iter().map(|f| f.module.to_string()).collect();
                cycle.push(target.to_string());
                cycles.push(cycle);
                continue;
            }

            if visited.insert(target) {
                on_stack.insert(target);
                stack.push(Frame { module: target, next: 0 });
            }
        }
    }

    cycles
}

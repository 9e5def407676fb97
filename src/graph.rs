//! Walks over the implicit signal graph
//!
//! Blocks only know their inputs, so every query here is a depth-first
//! search from a set of roots, keyed on block identity.

use std::collections::HashSet;

use log::debug;

use crate::block::{block_addr, Block, BlockRef};
use crate::error::{Result, SimError};

/// Fail with [`SimError::CyclicGraph`] if any root reaches itself
pub fn check_acyclic(roots: &[BlockRef]) -> Result<()> {
    let mut visiting = HashSet::new();
    let mut done = HashSet::new();
    for root in roots {
        visit(root, &mut visiting, &mut done, &mut |_: &BlockRef| {})?;
    }
    Ok(())
}

/// All blocks reachable from `roots`, each once, inputs before consumers
pub fn upstream(roots: &[BlockRef]) -> Result<Vec<BlockRef>> {
    let mut visiting = HashSet::new();
    let mut done = HashSet::new();
    let mut order = Vec::new();
    for root in roots {
        visit(root, &mut visiting, &mut done, &mut |b: &BlockRef| order.push(b.clone()))?;
    }
    Ok(order)
}

/// Reset every stateful block reachable from `roots`, returning how many
pub fn reset_upstream(roots: &[BlockRef]) -> Result<usize> {
    let mut count = 0;
    for block in upstream(roots)? {
        if block.is_stateful() {
            Block::reset(block.as_ref());
            count += 1;
        }
    }
    debug!("reset {} stateful block(s)", count);
    Ok(count)
}

/// Returns true if `target` is `from` or one of its (transitive) inputs
pub fn reaches(from: &BlockRef, target: &dyn Block) -> bool {
    let target = block_addr(target);
    let mut seen = HashSet::new();
    let mut stack = vec![from.clone()];

    while let Some(block) = stack.pop() {
        let addr = block_addr(block.as_ref());
        if addr == target {
            return true;
        }
        if seen.insert(addr) {
            stack.extend(block.inputs());
        }
    }
    false
}

fn visit(
    block: &BlockRef,
    visiting: &mut HashSet<*const ()>,
    done: &mut HashSet<*const ()>,
    on_done: &mut dyn FnMut(&BlockRef),
) -> Result<()> {
    let addr = block_addr(block.as_ref());
    if done.contains(&addr) {
        return Ok(());
    }
    if !visiting.insert(addr) {
        return Err(SimError::CyclicGraph(block.name().to_string()));
    }

    for input in block.inputs() {
        visit(&input, visiting, done, on_done)?;
    }

    visiting.remove(&addr);
    done.insert(addr);
    on_done(block);
    Ok(())
}

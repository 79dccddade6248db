use crate::{
    foundation::core::Affine,
    foundation::error::{HierError, HierResult},
    transform::ops::TransformOp,
};

/// LIFO save/restore discipline over a single current transform.
///
/// Each render pass owns its own stack. `push` stores a copy of the current matrix, so later
/// `compose` calls never reach the saved snapshot; `pop` brings it back exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new(Affine::IDENTITY)
    }
}

impl TransformStack {
    /// Start a stack whose current transform is `root`.
    pub fn new(root: Affine) -> Self {
        Self {
            current: root,
            saved: Vec::new(),
        }
    }

    /// Transform to draw primitives under.
    pub fn current(&self) -> Affine {
        self.current
    }

    /// Number of saved snapshots.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Replace the current transform without touching saved snapshots.
    pub fn set(&mut self, transform: Affine) {
        self.current = transform;
    }

    /// Save a copy of the current transform.
    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Restore the most recently pushed transform.
    pub fn pop(&mut self) -> HierResult<()> {
        self.current = self.saved.pop().ok_or(HierError::StackUnderflow)?;
        Ok(())
    }

    /// `current = current * op`.
    pub fn compose(&mut self, op: TransformOp) {
        self.concat(op.to_affine());
    }

    /// `current = current * transform`.
    pub fn concat(&mut self, transform: Affine) {
        self.current = self.current * transform;
    }

    /// Compose a translation.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.compose(TransformOp::translate(dx, dy));
    }

    /// Compose a scale.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.compose(TransformOp::scale(sx, sy));
    }

    /// Compose a rotation in radians.
    pub fn rotate(&mut self, radians: f64) {
        self.compose(TransformOp::rotate(radians));
    }

    /// Compose a shear.
    pub fn shear(&mut self, shx: f64, shy: f64) {
        self.compose(TransformOp::shear(shx, shy));
    }

    /// Push now and pop when the returned guard is dropped.
    ///
    /// The guard derefs to the stack, so nested `save` calls work through it.
    pub fn save(&mut self) -> StackGuard<'_> {
        let base = self.depth();
        self.push();
        StackGuard { stack: self, base }
    }

    /// Drop every snapshot above `base`, restoring the one stored at index `base`.
    ///
    /// Used by guards so that a leaked inner push cannot outlive its enclosing scope.
    pub(crate) fn unwind_to(&mut self, base: usize) {
        if self.saved.len() <= base {
            tracing::warn!(
                depth = self.saved.len(),
                base,
                "snapshot already popped before its guard was released"
            );
            return;
        }
        if self.saved.len() > base + 1 {
            tracing::warn!(
                leaked = self.saved.len() - base - 1,
                "discarding unmatched pushes at scope exit"
            );
        }
        self.saved.truncate(base + 1);
        if let Some(t) = self.saved.pop() {
            self.current = t;
        }
    }

    /// End a pass: the stack must be back at depth zero.
    pub fn finish(self) -> HierResult<Affine> {
        if !self.saved.is_empty() {
            return Err(HierError::UnbalancedStack {
                depth: self.saved.len(),
            });
        }
        Ok(self.current)
    }
}

/// Scoped save of a [`TransformStack`]; restores the saved transform on drop.
pub struct StackGuard<'a> {
    stack: &'a mut TransformStack,
    base: usize,
}

impl std::ops::Deref for StackGuard<'_> {
    type Target = TransformStack;

    fn deref(&self) -> &Self::Target {
        self.stack
    }
}

impl std::ops::DerefMut for StackGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.stack
    }
}

impl Drop for StackGuard<'_> {
    fn drop(&mut self) {
        self.stack.unwind_to(self.base);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/stack.rs"]
mod tests;

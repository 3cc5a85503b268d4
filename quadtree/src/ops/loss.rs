use crate::{quadrant_dims, Error, Node, Quad, Result};

/// Largest loss over the Leaf quadrants of `compressed`.
///
/// The loss of a compressed Leaf is the standard deviation of the pixels the
/// `original` tree holds in the same `width x height` region. Empty quadrants,
/// and quadrants without any pixels, lose nothing. `original` must be at
/// least as finely divided as `compressed` everywhere `compressed` has an
/// Internal node.
pub fn maximum_loss(original: &Node, compressed: &Node, width: usize, height: usize) -> Result<f64> {
    match (original, compressed) {
        (_, Node::Empty) => Ok(0.0),
        (_, Node::Leaf(_)) => {
            let region = original.to_pixels(width, height);
            if region.is_empty() {
                Ok(0.0)
            } else {
                Ok(region.standard_deviation_and_mean().0)
            }
        }
        (Node::Internal(original), Node::Internal(compressed)) => Quad::as_ref(original)
            .zip(Quad::as_ref(compressed))
            .zip(quadrant_dims(width, height))
            .into_iter()
            .map(|((original, compressed), (w, h))| maximum_loss(original, compressed, w, h))
            .try_fold(0.0, |max: f64, loss| Ok(max.max(loss?))),
        (_, Node::Internal(_)) => Err(Error::Precondition(
            "compressed tree is more finely divided than the original",
        )),
    }
}

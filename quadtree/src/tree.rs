use tracing::{debug, trace_span};

use crate::{maximum_loss, Error, Grid, Node, Result};

/// A compressed image: the root node plus the dimensions it renders at.
///
/// Created empty with a loss level, then filled by [`QuadTree::build`], or
/// restored in one go with [`QuadTree::restore_from_preorder`]. The preorder
/// form doesn't record dimensions, so they travel separately.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadTree {
    loss_level: f64,
    width: usize,
    height: usize,
    root: Option<Node>,
}

impl Default for QuadTree {
    fn default() -> Self {
        Self {
            loss_level: 0.0,
            width: 0,
            height: 0,
            root: None,
        }
    }
}

impl QuadTree {
    pub fn new(loss_level: f64) -> Result<Self> {
        if loss_level.is_nan() || loss_level < 0.0 {
            return Err(Error::InvalidLossLevel(loss_level));
        }
        Ok(Self {
            loss_level,
            ..Self::default()
        })
    }

    pub fn loss_level(&self) -> f64 {
        self.loss_level
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }
    fn built_root(&self) -> Result<&Node> {
        self.root.as_ref().ok_or(Error::NotBuilt)
    }

    /// Compresses `grid`, replacing any previous tree.
    ///
    /// With `mirror` the top half of the result reflects the bottom half,
    /// which needs the root to be Internal. On error the tree is unchanged.
    pub fn build(&mut self, grid: &Grid, mirror: bool) -> Result<()> {
        let (width, height) = (grid.width(), grid.height());
        if grid.is_empty() {
            return Err(Error::EmptyGrid { width, height });
        }
        let _span = trace_span!("build", width, height, loss_level = self.loss_level, mirror).entered();

        let mut root = Node::build(grid, self.loss_level);
        if mirror && !root.mirror() {
            return Err(Error::Precondition("only an internal root can be mirrored"));
        }
        debug!(size = root.size(), depth = root.depth(), "built tree");

        self.width = width;
        self.height = height;
        self.root = Some(root);
        Ok(())
    }

    /// Rebuilds a tree from preorder tokens, as produced by
    /// [`QuadTree::serialize_preorder`] split on commas.
    ///
    /// The root may be any variant, so whole-image Leaf trees round trip too.
    /// The restored tree has a loss level of 0 since the tokens don't record one.
    pub fn restore_from_preorder<S: AsRef<str>>(
        tokens: &[S],
        width: usize,
        height: usize,
    ) -> Result<Self> {
        let _span = trace_span!("restore", tokens = tokens.len(), width, height).entered();
        let root = Node::read_preorder(tokens)?;
        debug!(size = root.size(), "restored tree");
        Ok(Self {
            width,
            height,
            root: Some(root),
            ..Self::default()
        })
    }
    pub fn restore_from_preorder_str(preorder: &str, width: usize, height: usize) -> Result<Self> {
        let tokens: Vec<&str> = preorder.split(crate::TOKEN_SEPARATOR).collect();
        Self::restore_from_preorder(&tokens, width, height)
    }

    pub fn to_pixels(&self) -> Result<Grid> {
        Ok(self.built_root()?.to_pixels(self.width, self.height))
    }
    pub fn serialize_preorder(&self) -> Result<String> {
        Ok(self.built_root()?.to_preorder_string())
    }
    /// number of Empty and Leaf nodes, see [`Node::size`]
    pub fn tree_size(&self) -> Result<usize> {
        Ok(self.built_root()?.size())
    }

    /// Reflects the bottom half of the image over the top half.
    pub fn mirror(&mut self) -> Result<()> {
        let _span = trace_span!("mirror").entered();
        let root = self.root.as_mut().ok_or(Error::NotBuilt)?;
        if root.mirror() {
            Ok(())
        } else {
            Err(Error::Precondition("only an internal root can be mirrored"))
        }
    }

    /// See [`maximum_loss`], with `self` as the original.
    pub fn maximum_loss(&self, compressed: &QuadTree) -> Result<f64> {
        if (self.width, self.height) != (compressed.width, compressed.height) {
            return Err(Error::Precondition("trees have different dimensions"));
        }
        let _span = trace_span!("maximum_loss", width = self.width, height = self.height).entered();
        maximum_loss(
            self.built_root()?,
            compressed.built_root()?,
            self.width,
            self.height,
        )
    }
}

//! A tagged union over the concrete backends.
//!
//! [`AnyAdjacency`] lets callers hold "some adjacency list" without boxing a
//! trait object, and gives conversions a cheap path: converting an
//! `AnyAdjacency` into the backend it already holds is a move, into its
//! weighted or unweighted twin is a move plus dropping or adding weights, and
//! only genuinely different layouts are rebuilt, reading the source's storage
//! directly. Use the `from_adjacency` constructors for foreign implementations.

use crate::{
    error::Result,
    graph::{
        Adjacency, AdjacencyList, CsrAdjacency, Weight, WeightedAdjacency, WeightedAdjacencyList,
        WeightedCsrAdjacency,
    },
};

/// Which concrete backend an [`AnyAdjacency`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// [`AdjacencyList`].
    List,
    /// [`CsrAdjacency`].
    Csr,
    /// [`WeightedAdjacencyList`].
    WeightedList,
    /// [`WeightedCsrAdjacency`].
    WeightedCsr,
}

/// One of the four concrete backends.
///
/// Unweighted variants report `W::one()` for every weight.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyAdjacency<W: Weight = f64> {
    /// A mutable list.
    List(AdjacencyList),
    /// A compact list.
    Csr(CsrAdjacency),
    /// A mutable weighted list.
    WeightedList(WeightedAdjacencyList<W>),
    /// A compact weighted list.
    WeightedCsr(WeightedCsrAdjacency<W>),
}

macro_rules! delegate {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            AnyAdjacency::List($inner) => $body,
            AnyAdjacency::Csr($inner) => $body,
            AnyAdjacency::WeightedList($inner) => $body,
            AnyAdjacency::WeightedCsr($inner) => $body,
        }
    };
}

impl<W: Weight> AnyAdjacency<W> {
    /// The backend currently held.
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::List(_) => BackendKind::List,
            Self::Csr(_) => BackendKind::Csr,
            Self::WeightedList(_) => BackendKind::WeightedList,
            Self::WeightedCsr(_) => BackendKind::WeightedCsr,
        }
    }

    /// Returns `true` for the two weighted variants.
    pub fn is_weighted(&self) -> bool {
        matches!(self, Self::WeightedList(_) | Self::WeightedCsr(_))
    }

    /// Converts into `kind`, moving storage wherever the layouts agree.
    pub fn convert(self, kind: BackendKind) -> Self {
        if self.kind() == kind {
            return self;
        }
        debug_event!(from = ?self.kind(), to = ?kind, "converting adjacency backend");
        match kind {
            BackendKind::List => Self::List(self.into()),
            BackendKind::Csr => Self::Csr(self.into()),
            BackendKind::WeightedList => Self::WeightedList(self.into()),
            BackendKind::WeightedCsr => Self::WeightedCsr(self.into()),
        }
    }
}

impl<W: Weight> Adjacency for AnyAdjacency<W> {
    fn node_count(&self) -> usize {
        delegate!(self, inner => inner.node_count())
    }

    fn connection_count(&self) -> usize {
        delegate!(self, inner => inner.connection_count())
    }

    fn adjacent_count(&self, node: usize) -> Result<usize> {
        delegate!(self, inner => inner.adjacent_count(node))
    }

    fn adjacent(&self, node: usize, slot: usize) -> Result<usize> {
        delegate!(self, inner => inner.adjacent(node, slot))
    }

    fn position_of(&self, node: usize, adjacent: usize) -> Result<Option<usize>> {
        delegate!(self, inner => inner.position_of(node, adjacent))
    }
}

impl<W: Weight> WeightedAdjacency for AnyAdjacency<W> {
    type Weight = W;

    fn weight(&self, node: usize, slot: usize) -> Result<W> {
        match self {
            Self::List(list) => list.adjacent(node, slot).map(|_| W::one()),
            Self::Csr(csr) => csr.adjacent(node, slot).map(|_| W::one()),
            Self::WeightedList(list) => list.weight(node, slot),
            Self::WeightedCsr(csr) => csr.weight(node, slot),
        }
    }
}

impl<W: Weight> From<AdjacencyList> for AnyAdjacency<W> {
    fn from(list: AdjacencyList) -> Self {
        Self::List(list)
    }
}

impl<W: Weight> From<CsrAdjacency> for AnyAdjacency<W> {
    fn from(csr: CsrAdjacency) -> Self {
        Self::Csr(csr)
    }
}

impl<W: Weight> From<WeightedAdjacencyList<W>> for AnyAdjacency<W> {
    fn from(list: WeightedAdjacencyList<W>) -> Self {
        Self::WeightedList(list)
    }
}

impl<W: Weight> From<WeightedCsrAdjacency<W>> for AnyAdjacency<W> {
    fn from(csr: WeightedCsrAdjacency<W>) -> Self {
        Self::WeightedCsr(csr)
    }
}

impl<W: Weight> From<AnyAdjacency<W>> for AdjacencyList {
    fn from(any: AnyAdjacency<W>) -> Self {
        match any {
            AnyAdjacency::List(list) => list,
            AnyAdjacency::WeightedList(list) => list.into_list(),
            AnyAdjacency::Csr(csr) => Self::from(&csr),
            AnyAdjacency::WeightedCsr(csr) => Self::from(csr.as_csr()),
        }
    }
}

impl<W: Weight> From<AnyAdjacency<W>> for CsrAdjacency {
    fn from(any: AnyAdjacency<W>) -> Self {
        match any {
            AnyAdjacency::Csr(csr) => csr,
            AnyAdjacency::WeightedCsr(csr) => csr.into_csr(),
            AnyAdjacency::List(list) => Self::from(&list),
            AnyAdjacency::WeightedList(list) => Self::from(list.as_list()),
        }
    }
}

impl<W: Weight> From<AnyAdjacency<W>> for WeightedAdjacencyList<W> {
    fn from(any: AnyAdjacency<W>) -> Self {
        match any {
            AnyAdjacency::WeightedList(list) => list,
            AnyAdjacency::WeightedCsr(csr) => Self::from(&csr),
            AnyAdjacency::List(list) => Self::from(list),
            AnyAdjacency::Csr(csr) => Self::from(AdjacencyList::from(&csr)),
        }
    }
}

impl<W: Weight> From<AnyAdjacency<W>> for WeightedCsrAdjacency<W> {
    fn from(any: AnyAdjacency<W>) -> Self {
        match any {
            AnyAdjacency::WeightedCsr(csr) => csr,
            AnyAdjacency::WeightedList(list) => Self::from(&list),
            AnyAdjacency::Csr(csr) => Self::from(csr),
            AnyAdjacency::List(list) => Self::from(CsrAdjacency::from(&list)),
        }
    }
}

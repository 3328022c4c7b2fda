use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::core::{Cursor, DigraphMut};

#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<V, E> {
    AddVertex(V),
    PutEdge(V, V, E),
    RemoveEdge(V, V),
    RemoveVertex(V),
    RemoveVertices(Vec<V>),
    // Removal through the vertex cursor, at the position modulo vertex count.
    RemoveVertexAt(Index),
    // Removal through the targets cursor, at the position modulo out-degree.
    RemoveTargetAt(V, Index),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutOpResult<V, E> {
    AddVertex(bool),
    PutEdge(Option<E>),
    RemoveEdge(Option<E>),
    RemoveVertex(bool),
    RemoveVertices,
    RemoveVertexAt(Option<V>),
    RemoveTargetAt(Option<(V, E)>),
}

impl<V, E> MutOp<V, E> {
    pub fn apply<G>(self, graph: &mut G) -> MutOpResult<V, E>
    where
        G: DigraphMut<V, E>,
    {
        match self {
            MutOp::AddVertex(vertex) => MutOpResult::AddVertex(graph.add_vertex(vertex)),
            MutOp::PutEdge(source, target, edge) => {
                MutOpResult::PutEdge(graph.put_edge(source, target, edge))
            }
            MutOp::RemoveEdge(source, target) => {
                MutOpResult::RemoveEdge(graph.remove_edge(&source, &target))
            }
            MutOp::RemoveVertex(vertex) => MutOpResult::RemoveVertex(graph.remove_vertex(&vertex)),
            MutOp::RemoveVertices(vertices) => {
                graph.remove_vertices(&vertices);
                MutOpResult::RemoveVertices
            }
            MutOp::RemoveVertexAt(index) => {
                let Some(position) = index.get(graph.vertex_count()) else {
                    return MutOpResult::RemoveVertexAt(None);
                };

                let mut cursor = graph.vertices_mut();
                for _ in 0..=position {
                    cursor.next();
                }
                MutOpResult::RemoveVertexAt(cursor.remove_current())
            }
            MutOp::RemoveTargetAt(source, index) => {
                let Some(position) = index.get(graph.out_degree(&source)) else {
                    return MutOpResult::RemoveTargetAt(None);
                };

                let mut cursor = graph.targets_mut(&source);
                for _ in 0..=position {
                    cursor.next();
                }
                MutOpResult::RemoveTargetAt(cursor.remove_current())
            }
        }
    }

    pub fn uses_cursor(&self) -> bool {
        matches!(self, MutOp::RemoveVertexAt(_) | MutOp::RemoveTargetAt(_, _))
    }
}

pub struct MutOpsSeq<V, E>(pub Vec<MutOp<V, E>>);

impl<V, E> IntoIterator for MutOpsSeq<V, E> {
    type Item = MutOp<V, E>;
    type IntoIter = std::vec::IntoIter<MutOp<V, E>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V, E> MutOpsSeq<V, E> {
    /// Prints the sequence as code and applies it, for turning a failing case
    /// into a unit test.
    pub fn replay<G>(self, graph: &mut G)
    where
        V: fmt::Debug,
        E: fmt::Debug,
        G: DigraphMut<V, E>,
    {
        println!("let mut graph = MapDigraph::new();");
        println!();

        for op in self {
            match &op {
                MutOp::AddVertex(vertex) => println!("graph.add_vertex({vertex:?});"),
                MutOp::PutEdge(source, target, edge) => {
                    println!("graph.put_edge({source:?}, {target:?}, {edge:?});")
                }
                MutOp::RemoveEdge(source, target) => {
                    println!("graph.remove_edge(&{source:?}, &{target:?});")
                }
                MutOp::RemoveVertex(vertex) => println!("graph.remove_vertex(&{vertex:?});"),
                MutOp::RemoveVertices(vertices) => {
                    println!("graph.remove_vertices(&{vertices:?});")
                }
                MutOp::RemoveVertexAt(index) => {
                    println!("// remove vertex at {index:?} through cursor")
                }
                MutOp::RemoveTargetAt(source, index) => {
                    println!("// remove target of {source:?} at {index:?} through cursor")
                }
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for MutOpsSeq<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpKind {
    AddVertex,
    PutEdge,
    RemoveEdge,
    RemoveVertex,
    RemoveVertices,
    RemoveVertexAt,
    RemoveTargetAt,
}

// Insertions are more frequent than removals so that the digraph grows.
const WEIGHTS: [(OpKind, u32); 7] = [
    (OpKind::AddVertex, 15),
    (OpKind::PutEdge, 50),
    (OpKind::RemoveEdge, 12),
    (OpKind::RemoveVertex, 8),
    (OpKind::RemoveVertices, 3),
    (OpKind::RemoveVertexAt, 4),
    (OpKind::RemoveTargetAt, 8),
];

impl<'a, V, E> Arbitrary<'a> for MutOpsSeq<V, E>
where
    V: Arbitrary<'a>,
    E: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut seq = Vec::new();

        while !u.is_empty() {
            match arbitrary_op(u) {
                Ok(op) => seq.push(op),
                Err(_) => break,
            }
        }

        Ok(MutOpsSeq(seq))
    }
}

fn arbitrary_op<'a, V, E>(u: &mut Unstructured<'a>) -> arbitrary::Result<MutOp<V, E>>
where
    V: Arbitrary<'a>,
    E: Arbitrary<'a>,
{
    let total = WEIGHTS.iter().map(|(_, weight)| weight).sum::<u32>();
    let mut pick = u.int_in_range(0..=total - 1)?;

    let kind = WEIGHTS
        .iter()
        .find_map(|&(kind, weight)| {
            if pick < weight {
                Some(kind)
            } else {
                pick -= weight;
                None
            }
        })
        .unwrap_or(OpKind::AddVertex);

    match kind {
        OpKind::AddVertex => Ok(MutOp::AddVertex(u.arbitrary()?)),
        OpKind::PutEdge => Ok(MutOp::PutEdge(
            u.arbitrary()?,
            u.arbitrary()?,
            u.arbitrary()?,
        )),
        OpKind::RemoveEdge => Ok(MutOp::RemoveEdge(u.arbitrary()?, u.arbitrary()?)),
        OpKind::RemoveVertex => Ok(MutOp::RemoveVertex(u.arbitrary()?)),
        OpKind::RemoveVertices => {
            let len = u.int_in_range(0..=4)?;
            let vertices = (0..len)
                .map(|_| u.arbitrary())
                .collect::<arbitrary::Result<Vec<_>>>()?;
            Ok(MutOp::RemoveVertices(vertices))
        }
        OpKind::RemoveVertexAt => Ok(MutOp::RemoveVertexAt(u.arbitrary()?)),
        OpKind::RemoveTargetAt => Ok(MutOp::RemoveTargetAt(u.arbitrary()?, u.arbitrary()?)),
    }
}

use attrgraph::*;
use proptest::prelude::*;

type Weighted = Graph<Layout<(), Weight<u32>>>;

fn edge_list(max_vertices: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1..max_vertices).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n, any::<u32>()), 0..64);
        (Just(n), edges)
    })
}

proptest! {
    #[test]
    fn indices_are_dense_and_capacity_holds(capacity in 0usize..64, attempts in 0usize..96) {
        let mut g: Graph<Layout<Name>> = Graph::with_capacity(capacity);

        for i in 0..attempts {
            let res = g.try_append_vertex(Name::new(format!("v{}", i)));
            if i < capacity {
                prop_assert_eq!(res.map(|id| id.as_usize()), Ok(i));
            } else {
                prop_assert_eq!(res, Err(GraphError::CapacityExceeded { capacity }));
            }
            prop_assert!(g.len() <= g.capacity());
        }

        prop_assert_eq!(g.len(), attempts.min(capacity));
        for (pos, v) in g.vertices().enumerate() {
            prop_assert_eq!(v.index().as_usize(), pos);
            prop_assert_eq!(v.name(), &format!("v{}", pos));
        }
    }

    #[test]
    fn edges_keep_insertion_order((n, edges) in edge_list(16)) {
        let mut g = Weighted::with_capacity(n);
        let ids: Vec<VertexId> = (0..n).map(|_| g.append_vertex(())).collect();

        // Vertex addresses must not move while edges are added
        let before: Vec<*const Vertex<Layout<(), Weight<u32>>>> =
            g.vertices().map(|v| v as *const _).collect();

        for &(s, t, w) in &edges {
            g.append_edge(ids[s], ids[t], Weight(w));
        }

        let after: Vec<*const Vertex<Layout<(), Weight<u32>>>> =
            g.vertices().map(|v| v as *const _).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(g.edge_count(), edges.len());

        for v in g.vertices() {
            let expected: Vec<(usize, u32)> = edges
                .iter()
                .filter(|(s, _, _)| *s == v.index().as_usize())
                .map(|&(_, t, w)| (t, w))
                .collect();
            let actual: Vec<(usize, u32)> = v
                .edges()
                .map(|e| (e.target().as_usize(), *e.weight()))
                .collect();
            prop_assert_eq!(actual, expected);

            for e in v.edges() {
                prop_assert!(std::ptr::eq(g.source_of(e), v));
                prop_assert!(std::ptr::eq(g.target_of(e), &g[e.target()]));
            }
        }
    }

    #[test]
    fn unknown_endpoints_are_rejected(n in 1usize..16, offset in 0usize..8) {
        let mut g = Weighted::with_capacity(n + offset + 1);
        let inside = g.append_vertex(());
        for _ in 1..n {
            g.append_vertex(());
        }

        // A handle minted by a larger graph, past the end of this one
        let mut larger = Weighted::with_capacity(n + offset + 1);
        let outside = (0..=n + offset)
            .map(|_| larger.append_vertex(()))
            .last()
            .unwrap();

        prop_assert_eq!(
            g.try_append_edge(inside, outside, Weight(1)),
            Err(GraphError::InvalidEdgeTarget(outside))
        );
        prop_assert_eq!(
            g.try_append_edge(outside, inside, Weight(1)),
            Err(GraphError::InvalidEdgeSource(outside))
        );
        prop_assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn unit_intersection_is_a_subset(
        a in prop::collection::btree_set(0u32..64, 0..32),
        b in prop::collection::btree_set(0u32..64, 0..32),
    ) {
        let a: UnitSet = a.into_iter().collect();
        let b: UnitSet = b.into_iter().collect();
        let both = a.intersection(&b);

        prop_assert!(a.is_superset(&both));
        prop_assert!(b.is_superset(&both));
        prop_assert!(both.iter().all(|u| a.contains(u) && b.contains(u)));
    }
}

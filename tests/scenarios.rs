use egui_dsviz::model::{bucket_of, HeapEntry};
use egui_dsviz::ops::{
    ArrayCommand, GraphCommand, HashTableCommand, PriorityQueueCommand, TreeCommand,
};
use egui_dsviz::{Command, Reply, Session, Severity, Structure, TraversalKind, Variant};

fn elements(session: &Session) -> Vec<i64> {
    match session.structure() {
        Structure::Array(a) => a.elements().to_vec(),
        _ => panic!("not an array"),
    }
}

#[test]
fn test_array_insert_then_remove() {
    let mut s = Session::new(Variant::Array).with_seed(7);
    s.apply(Command::Array(ArrayCommand::Insert {
        value: 6,
        index: None,
    }))
    .unwrap();
    assert_eq!(elements(&s), vec![5, 2, 8, 1, 9, 6]);

    let removed = s
        .apply(Command::Array(ArrayCommand::Remove { index: 1 }))
        .unwrap();
    assert_eq!(removed, Reply::Value(2));
    assert_eq!(elements(&s), vec![5, 8, 1, 9, 6]);
    assert_eq!(s.log().len(), 2);
}

#[test]
fn test_heap_push_and_pop() {
    let mut s = Session::new(Variant::PriorityQueue);
    s.apply(Command::PriorityQueue(PriorityQueueCommand::Push {
        value: 50,
        priority: 50,
    }))
    .unwrap();
    let Structure::PriorityQueue(heap) = s.structure() else {
        panic!("not a heap");
    };
    assert_eq!(heap.entries()[0], HeapEntry::new(50, 50));

    let popped = s
        .apply(Command::PriorityQueue(PriorityQueueCommand::Pop))
        .unwrap();
    assert_eq!(popped, Reply::Entry(HeapEntry::new(50, 50)));
    let Structure::PriorityQueue(heap) = s.structure() else {
        panic!("not a heap");
    };
    assert_eq!(heap.entries()[0], HeapEntry::new(40, 40));
}

#[test]
fn test_hash_buckets() {
    assert_eq!(bucket_of("10"), 7);
    assert_eq!(bucket_of("5"), 3);

    let mut s = Session::new(Variant::HashTable);
    s.apply(Command::HashTable(HashTableCommand::Clear)).unwrap();
    let reply = s
        .apply(Command::HashTable(HashTableCommand::Insert {
            key: "10".to_string(),
            value: "ten".to_string(),
        }))
        .unwrap();
    assert_eq!(reply, Reply::Index(Some(7)));
    let reply = s
        .apply(Command::HashTable(HashTableCommand::Insert {
            key: "5".to_string(),
            value: "five".to_string(),
        }))
        .unwrap();
    assert_eq!(reply, Reply::Index(Some(3)));

    let Structure::HashTable(table) = s.structure() else {
        panic!("not a hash table");
    };
    assert_eq!(table.buckets()[7][0].key, "10");
    assert_eq!(table.buckets()[3][0].key, "5");
}

#[test]
fn test_graph_dfs_tie_break() {
    let mut s = Session::new(Variant::Graph);
    s.apply(Command::Graph(GraphCommand::Clear)).unwrap();
    for id in ["A", "B", "C"] {
        s.apply(Command::Graph(GraphCommand::AddNode { id: id.to_string() }))
            .unwrap();
    }
    for (from, to) in [("A", "B"), ("A", "C"), ("B", "C")] {
        s.apply(Command::Graph(GraphCommand::AddEdge {
            from: from.to_string(),
            to: to.to_string(),
        }))
        .unwrap();
    }
    s.apply(Command::Graph(GraphCommand::Traverse {
        kind: TraversalKind::Dfs,
        start: "A".to_string(),
    }))
    .unwrap();
    s.finish_traversal();

    let Structure::Graph(g) = s.structure() else {
        panic!("not a graph");
    };
    assert_eq!(g.traversal(), ["A", "B", "C"]);
    assert_eq!(s.log().latest().unwrap().message, "DFS: A → B → C");
}

#[test]
fn test_bst_duplicate_insert() {
    let mut s = Session::new(Variant::BinaryTree);
    let before = s.structure().clone();
    s.apply(Command::Tree(TreeCommand::Insert { value: 30 }))
        .unwrap();
    assert_eq!(s.structure(), &before);
    assert!(s.log().is_empty());
    assert_eq!(s.status().unwrap().severity, Severity::Info);

    let Structure::BinaryTree(tree) = s.structure() else {
        panic!("not a tree");
    };
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.in_order(), vec![30, 50, 70]);
}

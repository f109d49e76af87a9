// Copyright (c) the eswalk contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Serialization tests: trees round-trip through JSON and the
//! deserialized tree walks identically to the original.

use eswalk::{
    walk, BinaryExpression, BinaryOp, BlockStatement, ExpressionStatement, Identifier,
    IfStatement, Node, NodeKind, NumberLiteral, Program, VisitResult, Visitor,
};

#[derive(Default)]
struct KindRecorder {
    kinds: Vec<NodeKind>,
}

impl Visitor for KindRecorder {
    fn visit_node(&mut self, node: &Node) -> VisitResult {
        self.kinds.push(node.kind());
        VisitResult::Continue
    }
}

fn kinds_of(node: &Node) -> Vec<NodeKind> {
    let mut recorder = KindRecorder::default();
    walk(&mut recorder, node);
    recorder.kinds
}

fn sample_tree() -> Node {
    Node::Program(Program {
        body: vec![Node::ExpressionStatement(ExpressionStatement {
            expression: Box::new(Node::BinaryExpression(BinaryExpression {
                operator: BinaryOp::Add,
                left: Box::new(Node::NumberLiteral(NumberLiteral { value: 1.0 })),
                right: Box::new(Node::Identifier(Identifier {
                    name: "x".to_string(),
                })),
            })),
        })],
    })
}

#[test]
fn json_round_trip_preserves_the_tree() {
    let tree = sample_tree();
    let json = serde_json::to_string(&tree).expect("serialize error");
    let back: Node = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(back, tree);
}

#[test]
fn deserialized_tree_walks_identically() {
    let tree = sample_tree();
    let json = serde_json::to_string(&tree).expect("serialize error");
    let back: Node = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(kinds_of(&back), kinds_of(&tree));
}

#[test]
fn hand_written_json_deserializes_with_absent_children() {
    // An `if` with no `else` branch: the absent child is plain `null`.
    let json = r#"{
        "IfStatement": {
            "test": { "BooleanLiteral": { "value": true } },
            "consequent": { "BlockStatement": { "list": [] } },
            "alternate": null
        }
    }"#;
    let tree: Node = serde_json::from_str(json).expect("deserialize error");

    match &tree {
        Node::IfStatement(IfStatement { alternate, .. }) => assert!(alternate.is_none()),
        other => panic!("expected IfStatement, got {}", other.kind()),
    }
    assert_eq!(
        kinds_of(&tree),
        vec![
            NodeKind::IfStatement,
            NodeKind::BooleanLiteral,
            NodeKind::BlockStatement,
        ],
    );
}

#[test]
fn block_statement_defaults_to_empty() {
    let block = BlockStatement::default();
    assert!(block.list.is_empty());
    let json = serde_json::to_string(&Node::BlockStatement(block)).expect("serialize error");
    assert_eq!(json, r#"{"BlockStatement":{"list":[]}}"#);
}

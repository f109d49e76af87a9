// Copyright (c) the eswalk contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An ECMAScript abstract syntax tree and visitor-driven traversal library.
//!
//! This crate decouples the shape of a parsed script from any analysis
//! built on top of it. It provides:
//!
//! - **The node model**: [`Node`], a single sum type over every grammar
//!   production, with child slots declared in source evaluation order.
//! - **The visitor contract**: [`Visitor`], an enter/exit hook pair per
//!   node (generic and per-kind), with a [`VisitResult`] controlling
//!   descent.
//! - **The walk algorithm**: [`walk`] and the per-variant `walk_*` family,
//!   the dispatch table mapping each grammar production to the order its
//!   children are traversed.
//!
//! The walker only walks: it never mutates the tree, resolves names, or
//! interprets anything. Trees come from an external parser, or from JSON
//! via the `serde` impls on every node type.
//!
//! # Quick Start
//!
//! ```
//! use eswalk::{walk, Node, NodeKind, VisitResult, Visitor};
//! use eswalk::{BinaryExpression, BinaryOp, ExpressionStatement, NumberLiteral, Program};
//!
//! // 1 + 2;
//! let tree = Node::Program(Program {
//!     body: vec![Node::ExpressionStatement(ExpressionStatement {
//!         expression: Box::new(Node::BinaryExpression(BinaryExpression {
//!             operator: BinaryOp::Add,
//!             left: Box::new(Node::NumberLiteral(NumberLiteral { value: 1.0 })),
//!             right: Box::new(Node::NumberLiteral(NumberLiteral { value: 2.0 })),
//!         })),
//!     })],
//! });
//!
//! #[derive(Default)]
//! struct KindRecorder {
//!     kinds: Vec<NodeKind>,
//! }
//!
//! impl Visitor for KindRecorder {
//!     fn visit_node(&mut self, node: &Node) -> VisitResult {
//!         self.kinds.push(node.kind());
//!         VisitResult::Continue
//!     }
//! }
//!
//! let mut recorder = KindRecorder::default();
//! walk(&mut recorder, &tree);
//!
//! assert_eq!(
//!     recorder.kinds,
//!     vec![
//!         NodeKind::Program,
//!         NodeKind::ExpressionStatement,
//!         NodeKind::BinaryExpression,
//!         NodeKind::NumberLiteral,
//!         NodeKind::NumberLiteral,
//!     ],
//! );
//! ```
//!
//! # Guarantees
//!
//! - Per-variant child order is fixed and matches source evaluation order;
//!   scope- and ordering-sensitive analyses may rely on it.
//! - Every node whose entry hook returned [`VisitResult::Continue`]
//!   receives exactly one exit call, after the exit calls of all its
//!   children.
//! - An absent optional child contributes no visitor calls.
//! - Dispatch is total over [`Node`]: an unhandled variant is a compile
//!   error, never a silently skipped subtree.
//!
//! Traversal is synchronous and recursive. Concurrent walks over the same
//! tree are safe as long as each uses its own visitor; the walker itself
//! shares no mutable state.

pub mod nodes;
pub use nodes::*;

pub mod visitor;
pub use visitor::{walk, walk_node, VisitResult, Visitor};

// Copyright (c) the eswalk contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Performance benchmarks for the walker.
//!
//! Run with:
//! ```bash
//! cargo bench
//! ```
//!
//! Two shapes matter: wide trees (many siblings, the common case for real
//! programs) and deep trees (recursion-heavy, the walker's worst case).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use eswalk::{
    walk, BinaryExpression, BinaryOp, CallExpression, ExpressionStatement, Identifier, Node,
    NumberLiteral, Program, UnaryExpression, UnaryOp, VisitResult, Visitor,
};

// =============================================================================
// Tree generation
// =============================================================================

/// A program of `n` statements, each a small call expression:
/// `f(i, i + 1);` repeated.
fn generate_wide_tree(n: usize) -> Node {
    let body = (0..n)
        .map(|i| {
            Node::ExpressionStatement(ExpressionStatement {
                expression: Box::new(Node::CallExpression(CallExpression {
                    callee: Box::new(Node::Identifier(Identifier {
                        name: format!("f{i}"),
                    })),
                    arguments: vec![
                        Node::NumberLiteral(NumberLiteral { value: i as f64 }),
                        Node::BinaryExpression(BinaryExpression {
                            operator: BinaryOp::Add,
                            left: Box::new(Node::NumberLiteral(NumberLiteral {
                                value: i as f64,
                            })),
                            right: Box::new(Node::NumberLiteral(NumberLiteral { value: 1.0 })),
                        }),
                    ],
                })),
            })
        })
        .collect();
    Node::Program(Program { body })
}

/// `!!!...x`, nested `depth` levels.
fn generate_deep_tree(depth: usize) -> Node {
    let mut node = Node::Identifier(Identifier {
        name: "x".to_string(),
    });
    for _ in 0..depth {
        node = Node::UnaryExpression(UnaryExpression {
            operator: UnaryOp::Not,
            operand: Box::new(node),
            postfix: false,
        });
    }
    node
}

// =============================================================================
// Benchmarks
// =============================================================================

#[derive(Default)]
struct NodeCounter {
    count: usize,
}

impl Visitor for NodeCounter {
    fn visit_node(&mut self, _node: &Node) -> VisitResult {
        self.count += 1;
        VisitResult::Continue
    }
}

fn bench_wide_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_wide");
    for size in [100, 1_000, 10_000] {
        let tree = generate_wide_tree(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| {
                let mut counter = NodeCounter::default();
                walk(&mut counter, black_box(tree));
                counter.count
            });
        });
    }
    group.finish();
}

fn bench_deep_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_deep");
    for depth in [64, 512] {
        let tree = generate_deep_tree(depth);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &tree, |b, tree| {
            b.iter(|| {
                let mut counter = NodeCounter::default();
                walk(&mut counter, black_box(tree));
                counter.count
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_wide_walk, bench_deep_walk);
criterion_main!(benches);

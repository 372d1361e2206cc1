use ast_jsdoc_rs::{
    collect_jsdoc, get_jsdoc_comment, AstArena, Comment, Node, NodeId, NodeKind, SourceLocation,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// `count` documented `var f = function () {}` statements, each nested
/// `depth` levels below its declaration
fn build_arena(count: u32, depth: u32) -> (AstArena, Vec<NodeId>) {
    let mut arena = AstArena::new();
    let mut expressions = Vec::new();
    let program = arena
        .alloc(Node::new(NodeKind::Program).with_lines(1, count * 3))
        .unwrap();

    for i in 0..count {
        let line = i * 3 + 2;
        let doc = Comment::block("* doc", SourceLocation::lines(line - 1, line - 1));
        let decl = arena
            .alloc(
                Node::new(NodeKind::VariableDeclaration)
                    .with_lines(line, line)
                    .with_parent(program)
                    .with_leading_comments(vec![doc]),
            )
            .unwrap();
        arena.push_body(program, decl).unwrap();

        let mut parent = decl;
        for _ in 0..depth {
            parent = arena
                .alloc(
                    Node::new(NodeKind::Other("ObjectExpression".to_string()))
                        .with_lines(line, line)
                        .with_parent(parent),
                )
                .unwrap();
        }
        let expr = arena
            .alloc(
                Node::new(NodeKind::FunctionExpression)
                    .with_lines(line, line)
                    .with_parent(parent),
            )
            .unwrap();
        expressions.push(expr);
    }

    (arena, expressions)
}

fn jsdoc_benchmark(c: &mut Criterion) {
    let (arena, expressions) = build_arena(1_000, 8);

    c.bench_function("resolve_function_expressions", |b| {
        b.iter(|| {
            for &id in &expressions {
                black_box(get_jsdoc_comment(&arena, id).unwrap());
            }
        });
    });

    c.bench_function("collect_jsdoc", |b| {
        b.iter(|| black_box(collect_jsdoc(&arena).unwrap()));
    });
}

criterion_group!(benches, jsdoc_benchmark);
criterion_main!(benches);

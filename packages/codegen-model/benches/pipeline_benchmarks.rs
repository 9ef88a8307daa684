//! Performance benchmarks for the generation pipeline
//!
//! - Classification: per-return-type cost of the lifting decision table
//! - Aggregation: one composition root over a growing module graph
//! - Full pipeline: sequential vs rayon over generated snapshots

use codegen_model::config::LiftingConfig;
use codegen_model::{
    Annotation, CapabilityAggregator, Declaration, DeclarationId, DeclarationSnapshot,
    GenerationConfig, GenerationPipeline, LiftingClassifier, MethodDecl, TypeKind, TypeRef,
    ValidatedConfig,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ============================================================================
// Fixtures
// ============================================================================

fn task(inner: Option<TypeRef>) -> TypeRef {
    match inner {
        Some(inner) => TypeRef::generic("Task", TypeKind::Class, vec![inner]),
        None => TypeRef::class("Task"),
    }
}

fn capability(index: usize) -> Declaration {
    Declaration::builder(format!("Bench.Services.IService{index}"))
        .interface()
        .method(MethodDecl::new("RunAsync", task(None)).param("id", TypeRef::value_type("int")))
        .method(MethodDecl::new("FindAsync", task(Some(TypeRef::class("Record").nullable()))))
        .method(MethodDecl::new("Count", TypeRef::value_type("int")))
        .build()
}

fn module(index: usize, targets: &[usize]) -> Declaration {
    let mut builder = Declaration::builder(format!("Bench.Modules.Module{index}"));
    for target in targets {
        let id = format!("Bench.Services.IService{target}");
        builder = builder.annotation(
            Annotation::new("EffectsModule")
                .with_type_arg(TypeRef::interface(format!("IService{target}")).resolved(id)),
        );
    }
    builder.build()
}

fn uses(index: usize) -> Annotation {
    Annotation::new("Uses").with_type_arg(
        TypeRef::class(format!("Module{index}")).resolved(format!("Bench.Modules.Module{index}")),
    )
}

/// `size` capabilities, one module per capability that also targets its
/// neighbour, and a runtime plus test runtime per ten modules
fn generated_snapshot(size: usize) -> DeclarationSnapshot {
    let mut declarations: Vec<Declaration> = (0..size).map(capability).collect();
    declarations.extend((0..size).map(|i| module(i, &[i, (i + 1) % size])));

    for root in 0..size.div_ceil(10) {
        let mut builder =
            Declaration::builder(format!("Bench.Runtime{root}")).annotation(Annotation::new("Runtime"));
        for i in (root * 10)..((root + 1) * 10).min(size) {
            builder = builder.annotation(uses(i));
        }
        declarations.push(builder.build());
        declarations.push(
            Declaration::builder(format!("Bench.Tests.TestRuntime{root}"))
                .annotation(Annotation::new("TestRuntime").with_type_arg(
                    TypeRef::class(format!("Runtime{root}")).resolved(format!("Bench.Runtime{root}")),
                ))
                .build(),
        );
    }

    DeclarationSnapshot::new(declarations).unwrap()
}

// ============================================================================
// Classification
// ============================================================================

fn bench_classification(c: &mut Criterion) {
    let config = LiftingConfig::default();
    let classifier = LiftingClassifier::new(&config);
    let owner = DeclarationId::new("Bench.IService");

    let shapes = [
        ("sync_void", TypeRef::void()),
        ("sync_value", TypeRef::value_type("int")),
        ("sync_nullable", TypeRef::class("Record").nullable()),
        ("async_void", task(None)),
        ("async_value", task(Some(TypeRef::value_type("bool")))),
        ("async_nullable", task(Some(TypeRef::class("Record").nullable()))),
    ];

    let mut group = c.benchmark_group("classification");
    for (label, ty) in &shapes {
        group.bench_with_input(BenchmarkId::from_parameter(label), ty, |b, ty| {
            b.iter(|| black_box(classifier.classify(&owner, black_box(ty))))
        });
    }
    group.finish();
}

// ============================================================================
// Aggregation
// ============================================================================

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for size in [10, 50, 200] {
        let mut declarations: Vec<Declaration> = (0..size).map(capability).collect();
        declarations.extend((0..size).map(|i| module(i, &[i])));
        let mut root = Declaration::builder("Bench.Root").annotation(Annotation::new("Runtime"));
        for i in 0..size {
            root = root.annotation(uses(i));
        }
        declarations.push(root.build());

        let snapshot = DeclarationSnapshot::new(declarations).unwrap();
        let config = ValidatedConfig::default();
        let aggregator = CapabilityAggregator::new(&snapshot, &config);
        let root = snapshot.get("Bench.Root").unwrap();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &root, |b, root| {
            b.iter(|| black_box(aggregator.aggregate(root)))
        });
    }

    group.finish();
}

// ============================================================================
// Full pipeline
// ============================================================================

fn bench_pipeline(c: &mut Criterion) {
    let sequential = GenerationPipeline::new(GenerationConfig::default().sequential().validated().unwrap());
    let parallel = GenerationPipeline::with_defaults();

    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);

    for size in [20, 100, 500] {
        let snapshot = generated_snapshot(size);
        group.throughput(Throughput::Elements(snapshot.len() as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &snapshot, |b, snapshot| {
            b.iter(|| black_box(sequential.run_to_completion(snapshot)))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &snapshot, |b, snapshot| {
            b.iter(|| black_box(parallel.run_to_completion(snapshot)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classification, bench_aggregation, bench_pipeline);
criterion_main!(benches);

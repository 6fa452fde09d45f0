use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use couplets::{CmuDict, CoupletFinder, FinderConfig, RhymeStrength, SentenceDetector};

const DICTIONARY: &str = "mat M AE1 T
bat B AE1 T
hat HH AE1 T
cat K AE1 T
sat S AE1 T
this DH IH1 S
kiss K IH1 S
miss M IH1 S
day D EY1
way W EY1
";

const ENDINGS: [&str; 9] = ["mat", "bat", "hat", "cat", "sat", "this", "kiss", "miss", "way"];

// WHY: Every sentence has a known key, so matching cost dominates over lookup misses
fn generate_text(sentences: usize) -> String {
    let mut text = String::new();
    for i in 0..sentences {
        text.push_str(&format!("Line {} ends upon the {}. ", i, ENDINGS[i % ENDINGS.len()]));
        if i % 8 == 7 {
            text.push('\n');
        }
    }
    text
}

fn bench_sentence_detection(c: &mut Criterion) {
    let detector = SentenceDetector::with_default_rules().unwrap();
    let text = generate_text(1000);

    let mut group = c.benchmark_group("sentence_detection");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("default_rules_1000", |b| {
        b.iter(|| detector.detect_sentences_borrowed(black_box(&text)).unwrap())
    });
    group.finish();
}

fn bench_couplet_search(c: &mut Criterion) {
    let detector = SentenceDetector::with_default_rules().unwrap();
    let dictionary = CmuDict::from_lines(DICTIONARY.lines()).unwrap();

    let mut group = c.benchmark_group("couplet_search");
    for sentences in [100, 500, 1000] {
        let text = generate_text(sentences);
        group.throughput(Throughput::Bytes(text.len() as u64));
        for strength in [1, 3] {
            let finder = CoupletFinder::new(
                &detector,
                &dictionary,
                FinderConfig {
                    strength: RhymeStrength::new(strength).unwrap(),
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("strength_{strength}"), sentences),
                &text,
                |b, text| b.iter(|| finder.find(black_box(text)).unwrap()),
            );
        }
    }
    group.finish();
}

fn bench_dictionary_parse(c: &mut Criterion) {
    let lines: Vec<String> = (0..5000)
        .map(|i| format!("word{} W ER1 D {}", i, if i % 2 == 0 { "Z" } else { "S" }))
        .collect();

    c.bench_function("dictionary_parse_5000", |b| {
        b.iter(|| CmuDict::from_lines(black_box(&lines)).unwrap())
    });
}

criterion_group!(benches, bench_sentence_detection, bench_couplet_search, bench_dictionary_parse);
criterion_main!(benches);

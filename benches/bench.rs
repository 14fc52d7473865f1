// Criterion benchmarks for the Talentia scoring core

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;
use talentia_scoring::{
    AnswerMap, AnswerValue, CandidateInput, CompatibilityEngine, PartnerProfile, Profiler,
    Question, QuestionBank, QuestionType, RankEngine, SkillRecord,
};

fn candidate(skill_count: usize) -> CandidateInput {
    CandidateInput {
        skills: (0..skill_count)
            .map(|i| SkillRecord {
                name: if i % 2 == 0 { "Rust" } else { "React" }.to_string(),
                level: 1 + (i % 10) as u8,
                experience_years: (i % 8) as f64,
                is_verified: i % 3 == 0,
            })
            .collect(),
        experience: vec![talentia_scoring::models::ExperienceRecord {
            company: "Google".to_string(),
            role: "Senior Engineer".to_string(),
            start_date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
            end_date: None,
            is_current: true,
        }],
        ..Default::default()
    }
}

fn scale_question(id: &str, dimension: &str) -> Question {
    Question {
        id: id.to_string(),
        question_type: QuestionType::Scale,
        dimension: dimension.to_string(),
        options: vec![],
    }
}

fn bank() -> QuestionBank {
    let mut questions = vec![
        scale_question("cm1", "agreeableness"),
        scale_question("cm2", "agreeableness"),
        scale_question("at2", "attachmentStyle"),
        scale_question("vl1", "conscientiousness"),
    ];
    for i in 0..40 {
        let dimension = ["emotionalStability", "openness", "agreeableness", "conscientiousness", "extroversion"][i % 5];
        questions.push(scale_question(&format!("q{}", i), dimension));
    }
    QuestionBank::new(questions)
}

fn answers(count: usize) -> AnswerMap {
    let mut map = HashMap::new();
    for i in 0..count {
        map.insert(format!("q{}", i), AnswerValue::Scale((i % 11) as f64));
    }
    map
}

fn bench_ranking(c: &mut Criterion) {
    let engine = RankEngine::with_defaults();

    let mut group = c.benchmark_group("ranking");
    for skill_count in [5, 25, 100].iter() {
        let input = candidate(*skill_count);
        group.bench_with_input(
            BenchmarkId::new("rank", skill_count),
            skill_count,
            |b, _| {
                b.iter(|| engine.rank(black_box(&input)).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_profiling(c: &mut Criterion) {
    let profiler = Profiler::with_default_keys(bank()).unwrap();

    let mut group = c.benchmark_group("profiling");
    for answer_count in [10, 40].iter() {
        let map = answers(*answer_count);
        group.bench_with_input(
            BenchmarkId::new("profile", answer_count),
            answer_count,
            |b, _| {
                b.iter(|| profiler.profile(black_box(&map)));
            },
        );
    }
    group.finish();
}

fn bench_compatibility(c: &mut Criterion) {
    let profiler = Profiler::with_default_keys(bank()).unwrap();
    let engine = CompatibilityEngine::new();

    let a = PartnerProfile {
        psychology_score: Some(profiler.profile(&answers(20))),
        diet: Some("vegetarian".to_string()),
        family_values: Some("moderate".to_string()),
    };
    let b = PartnerProfile {
        psychology_score: Some(profiler.profile(&answers(35))),
        diet: Some("vegan".to_string()),
        family_values: Some("traditional".to_string()),
    };

    c.bench_function("compatibility_report", |bencher| {
        bencher.iter(|| engine.report(black_box(&a), black_box(&b)));
    });
}

criterion_group!(benches, bench_ranking, bench_profiling, bench_compatibility);
criterion_main!(benches);

// Integration tests for coursematch
use chrono::NaiveDate;
use coursematch::{
    normalize_trainee_id, Course, DataSet, Error, IntakeProfile, Interaction, InteractionEvent,
    RecommenderEngine, RoleTags, SyntheticConfig, SyntheticData, Trainee, TraineeId,
};
use coursematch_storage::{
    write_table, COURSES_FILE, COURSES_HEADER, INTAKE_FILE, INTAKE_HEADER, INTERACTIONS_FILE,
    INTERACTIONS_HEADER, ROLE_TAGS_FILE, ROLE_TAGS_HEADER, TRAINEES_FILE, TRAINEES_HEADER,
};
use std::path::Path;

fn synthetic_engine() -> (tempfile::TempDir, RecommenderEngine) {
    let dir = tempfile::tempdir().unwrap();
    let config = SyntheticConfig {
        seed: 42,
        courses: 80,
        trainees: 200,
        interactions: 2000,
        today: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
    };
    SyntheticData::generate(&config).write_to(dir.path()).unwrap();
    let engine = RecommenderEngine::load(dir.path()).unwrap();
    (dir, engine)
}

fn write_data_dir(
    dir: &Path,
    courses: &[Course],
    trainees: &[Trainee],
    intake: &[IntakeProfile],
    role_tags: &[RoleTags],
) {
    let interactions = vec![Interaction {
        trainee_id: trainees[0].trainee_id.clone(),
        course_id: courses[0].course_id.clone(),
        event: InteractionEvent::Enroll,
        timestamp: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
    }];
    write_table(&dir.join(COURSES_FILE), COURSES_HEADER, courses).unwrap();
    write_table(&dir.join(TRAINEES_FILE), TRAINEES_HEADER, trainees).unwrap();
    write_table(&dir.join(INTAKE_FILE), INTAKE_HEADER, intake).unwrap();
    write_table(&dir.join(INTERACTIONS_FILE), INTERACTIONS_HEADER, &interactions).unwrap();
    write_table(&dir.join(ROLE_TAGS_FILE), ROLE_TAGS_HEADER, role_tags).unwrap();
}

#[test]
fn test_normalizer_properties() {
    let canonical = normalize_trainee_id(Some("متدرب-007")).unwrap();
    assert_eq!(normalize_trainee_id(Some("Trainee-7")).unwrap(), canonical);
    assert_eq!(normalize_trainee_id(Some("7")).unwrap(), canonical);
    assert_eq!(normalize_trainee_id(Some(canonical.as_str())).unwrap(), canonical);

    assert!(matches!(normalize_trainee_id(Some("")), Err(Error::InvalidIdentifier(_))));
    assert!(matches!(normalize_trainee_id(Some("abc")), Err(Error::InvalidIdentifier(_))));
    assert!(matches!(normalize_trainee_id(None), Err(Error::InvalidIdentifier(_))));
}

#[test]
fn test_synthetic_corpus_not_found() {
    let (_dir, engine) = synthetic_engine();
    assert_eq!(engine.data().courses().len(), 80);
    assert_eq!(engine.data().trainees().len(), 200);
    assert_eq!(engine.data().interactions().len(), 2000);

    assert!(matches!(
        engine.recommend_for_trainee("متدرب-999", 10),
        Err(Error::TraineeNotFound(_))
    ));
    assert!(matches!(
        engine.recommend_for_course("C999", 10),
        Err(Error::CourseNotFound(_))
    ));
}

#[test]
fn test_ranking_is_deterministic_and_ordered() {
    let (_dir, engine) = synthetic_engine();

    for top_k in [1, 5, 10, 80, 500] {
        let first = engine.recommend_for_trainee("Trainee-17", top_k).unwrap();
        let second = engine.recommend_for_trainee("متدرب-017", top_k).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), top_k.min(80));
        assert!(first.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(first.iter().all(|r| (0.0..=1.0).contains(&r.score)));

        let trainees = engine.recommend_for_course("C003", top_k).unwrap();
        assert_eq!(trainees, engine.recommend_for_course("C003", top_k).unwrap());
        assert_eq!(trainees.len(), top_k.min(200));
        assert!(trainees.windows(2).all(|w| w[0].score >= w[1].score));
    }

    assert!(engine.recommend_for_trainee("1", 0).unwrap().is_empty());
}

#[test]
fn test_every_synthetic_trainee_gets_recommendations() {
    let (_dir, engine) = synthetic_engine();
    for trainee in engine.data().trainees() {
        let recs = engine
            .recommend_for_trainee(trainee.trainee_id.as_str(), 3)
            .unwrap();
        assert_eq!(recs.len(), 3);
    }
}

#[test]
fn test_trainee_without_intake_row() {
    let dir = tempfile::tempdir().unwrap();
    let courses = vec![
        Course::new(
            "C001",
            "Threat hunting",
            "SOC",
            "advanced",
            "all",
            "Hunting threats in SIEM data",
        ),
        Course::new(
            "C002",
            "Court reporting",
            "Procedure",
            "beginner",
            "all",
            "Writing official reports",
        ),
    ];
    let trainees = vec![
        Trainee {
            trainee_id: TraineeId::from_number(1),
            agency: "Air Force SOC".to_string(),
            military: true,
            role: "SOC Analyst".to_string(),
        },
        Trainee {
            trainee_id: TraineeId::from_number(2),
            agency: "Courts".to_string(),
            military: false,
            role: "Clerk".to_string(),
        },
    ];
    let intake = vec![IntakeProfile {
        trainee_id: TraineeId::from_number(2),
        interests: "official reports".to_string(),
        skills: String::new(),
        goals: String::new(),
        notes: String::new(),
    }];
    let role_tags = vec![RoleTags {
        role: "SOC Analyst".to_string(),
        tags: "SIEM,threats".to_string(),
    }];
    write_data_dir(dir.path(), &courses, &trainees, &intake, &role_tags);

    let engine = RecommenderEngine::load(dir.path()).unwrap();
    assert!(engine.data().trainee(&TraineeId::from_number(1)).unwrap().military);
    assert_eq!(engine.data().interactions()[0].event, InteractionEvent::Enroll);

    let recs = engine.recommend_for_trainee("Trainee-1", 10).unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].course_id, "C001");
    assert!(recs[0].score > 0.0);
    assert_eq!(recs[1].score, 0.0);
}

#[test]
fn test_lexical_overlap_ranks_first() {
    let dir = tempfile::tempdir().unwrap();
    let overlapping = ["C010", "C025", "C040", "C077"];

    let courses: Vec<Course> = (1..=80)
        .map(|i| {
            let id = format!("C{i:03}");
            let description = if overlapping.contains(&id.as_str()) {
                match i % 2 {
                    0 => "تحقيقات في جرائم معلوماتية مع تطبيقات عملية",
                    _ => "استخبارات المصادر المفتوحة OSINT وتطبيقات عملية",
                }
            } else {
                "التخطيط التشغيلي وإدارة الأزمات والقيادة"
            };
            Course::new(
                id,
                format!("دورة رقم {i}"),
                "مسار تدريبي",
                "متوسط",
                "الجميع",
                description,
            )
        })
        .collect();

    let trainees = vec![Trainee {
        trainee_id: TraineeId::from_number(1),
        agency: "النيابة العامة".to_string(),
        military: false,
        role: "محقق".to_string(),
    }];
    let intake = vec![IntakeProfile {
        trainee_id: TraineeId::from_number(1),
        interests: "جرائم معلوماتية, OSINT".to_string(),
        skills: String::new(),
        goals: String::new(),
        notes: String::new(),
    }];
    let role_tags = vec![RoleTags {
        role: "محلل".to_string(),
        tags: "تحليل".to_string(),
    }];
    write_data_dir(dir.path(), &courses, &trainees, &intake, &role_tags);

    let engine = RecommenderEngine::load(dir.path()).unwrap();
    let recs = engine.recommend_for_trainee("متدرب-001", 5).unwrap();
    assert_eq!(recs.len(), 5);

    let mut top: Vec<&str> = recs[..4].iter().map(|r| r.course_id.as_str()).collect();
    top.sort_unstable();
    assert_eq!(top, overlapping);
    assert!(recs[..4].iter().all(|r| r.score > 0.0));
    assert_eq!(recs[4].score, 0.0);
    // ties among non-overlapping courses keep file order
    assert_eq!(recs[4].course_id, "C001");
}

#[test]
fn test_missing_file_is_fatal() {
    let (dir, _engine) = synthetic_engine();
    std::fs::remove_file(dir.path().join(ROLE_TAGS_FILE)).unwrap();
    assert!(matches!(
        RecommenderEngine::load(dir.path()),
        Err(Error::StartupLoad { .. })
    ));
}

#[test]
fn test_from_parts_matches_load() {
    let (dir, loaded) = synthetic_engine();
    let data = DataSet::load(dir.path()).unwrap();
    let engine = RecommenderEngine::new(data);

    let a = loaded.recommend_for_course("C010", 5).unwrap();
    let b = engine.recommend_for_course("C010", 5).unwrap();
    assert_eq!(a, b);
    assert_eq!(loaded.data().interactions(), engine.data().interactions());
}

//! Synthetic Arabic training data
//!
//! Produces the five reference tables with a seeded RNG so the same seed
//! always yields the same files.

use crate::dataset::{
    COURSES_FILE, COURSES_HEADER, INTAKE_FILE, INTAKE_HEADER, INTERACTIONS_FILE,
    INTERACTIONS_HEADER, ROLE_TAGS_FILE, ROLE_TAGS_HEADER, TRAINEES_FILE, TRAINEES_HEADER,
};
use crate::table::write_table;
use chrono::NaiveDate;
use coursematch_core::{
    Course, IntakeProfile, Interaction, InteractionEvent, Result, RoleTags, Trainee, TraineeId,
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::Path;
use tracing::info;

pub const TRACKS: &[&str] = &[
    "الجرائم المعلوماتية والتحقيقات الرقمية",
    "الأدلة الرقمية والتحليل الجنائي الرقمي",
    "الإجراءات النظامية وإدارة الأدلة",
    "الأمن السيبراني الأساسي وحماية الأنظمة",
    "مراكز العمليات الأمنية والاستجابة للحوادث",
    "تحليل البيانات لدعم التحقيقات",
    "الذكاء الاصطناعي في الأمن والتحقيقات",
    "القيادة والتشغيل وإدارة الأزمات",
];

pub const LEVELS: &[&str] = &["مبتدئ", "متوسط", "متقدم"];

pub const AUDIENCES: &[&str] = &["عسكري فقط", "مدني فقط", "الجميع"];

pub const AGENCIES: &[&str] = &[
    "النيابة العامة – وحدة الجرائم المعلوماتية",
    "الشرطة – إدارة التحريات والبحث الجنائي",
    "مختبر الأدلة الرقمية (التحليل الجنائي)",
    "إدارة الأمن السيبراني (جهة حكومية)",
    "إدارة مكافحة الاحتيال والجرائم المالية",
    "الدعم التقني للجهات العدلية والمحاكم",
    "وحدة الاستجابة للحوادث (IRT) – جهة حكومية",
    "وزارة الحرس الوطني – قطاع الأمن والحماية",
    "الحرس الملكي – الأمن والحماية",
    "القوات الجوية الملكية السعودية – الأمن السيبراني / مركز العمليات الأمنية (SOC)",
];

pub const MILITARY_AGENCIES: &[&str] = &[
    "وزارة الحرس الوطني – قطاع الأمن والحماية",
    "الحرس الملكي – الأمن والحماية",
    "القوات الجوية الملكية السعودية – الأمن السيبراني / مركز العمليات الأمنية (SOC)",
];

pub const INTERESTS: &[&str] = &[
    "جرائم معلوماتية",
    "تصيد احتيالي",
    "احتيال مالي",
    "برمجيات فدية",
    "أدلة رقمية",
    "أدلة الأجهزة الذكية",
    "أدلة الشبكات",
    "إجراءات نظامية وإثباتات",
    "سلسلة حفظ الأدلة",
    "مركز عمليات أمنية",
    "SIEM وتحليل تنبيهات",
    "الاستجابة للحوادث",
    "البحث عن التهديدات",
    "OSINT",
    "تحليل بيانات",
    "بايثون",
    "SQL",
    "ذكاء اصطناعي للأمن",
    "كشف الشذوذ والأنماط",
    "تحليل برمجيات خبيثة (أساسيات)",
];

pub const SKILLS: &[&str] = &[
    "أساسيات التحقيق الجنائي",
    "توثيق القضايا وكتابة المحاضر",
    "سلسلة حفظ الأدلة",
    "الإجراءات النظامية ذات العلاقة",
    "كتابة التقارير المهنية",
    "التعامل مع الأدلة الرقمية",
    "تحليل أجهزة التخزين",
    "التحليل الجنائي للذاكرة",
    "التحليل الجنائي للأجهزة الذكية",
    "التحليل الجنائي للشبكات",
    "أساسيات مركز العمليات الأمنية (SOC)",
    "تحليل السجلات",
    "أساسيات أنظمة SIEM",
    "الاستجابة للحوادث السيبرانية",
    "إدارة الثغرات الأمنية",
    "البحث عن التهديدات",
    "تحليل البيانات (Excel/مبادئ)",
    "أساسيات بايثون للتحليل",
    "أساسيات SQL",
    "OSINT (استخبارات المصادر المفتوحة)",
    "أساسيات تحليل البرمجيات الخبيثة",
    "التواصل والعرض",
    "التخطيط التشغيلي",
    "إدارة الأزمات",
    "أخلاقيات العمل والامتثال",
    "القيادة الأساسية",
];

pub const GOALS: &[&str] = &[
    "تطوير مهارات التحقيق",
    "التخصص في الأدلة الرقمية",
    "الاستعداد للعمل في مركز عمليات أمنية",
    "تحسين كتابة التقارير والمخرجات الرسمية",
    "ترقية وظيفية/رفع جاهزية الأداء",
    "الانتقال لمسار الأمن السيبراني",
    "تعلم تحليل البيانات لدعم القضايا",
    "فهم تطبيقات الذكاء الاصطناعي في العمل",
    "رفع الوعي بالامتثال وأخلاقيات التقنية",
];

pub const NOTES: &[&str] = &[
    "يرغب في تطبيق عملي وحالات واقعية.",
    "يحتاج مسار تدريجي من مبتدئ إلى متقدم.",
    "يركز على تحسين كتابة التقارير الرسمية.",
    "مهتم بتعلم أدوات التحليل الرقمي.",
    "يريد فهم آليات الاستجابة للحوادث.",
];

/// Roles and their comma-separated tags
pub const ROLE_TAGS: &[(&str, &str)] = &[
    (
        "محقق جرائم معلوماتية",
        "جرائم معلوماتية,إجراءات نظامية وإثباتات,OSINT,تحليل بيانات",
    ),
    (
        "محلل أدلة رقمية",
        "أدلة رقمية,أدلة الأجهزة الذكية,أدلة الشبكات,سلسلة حفظ الأدلة",
    ),
    (
        "محلل مركز عمليات أمنية (SOC)",
        "مركز عمليات أمنية,SIEM وتحليل تنبيهات,الاستجابة للحوادث,البحث عن التهديدات",
    ),
    (
        "باحث قانوني/إجرائي",
        "إجراءات نظامية وإثباتات,سلسلة حفظ الأدلة,كتابة تقارير",
    ),
    ("محلل بيانات للتحقيقات", "تحليل بيانات,SQL,بايثون,كشف الشذوذ والأنماط"),
    (
        "مختص أمن سيبراني",
        "الاستجابة للحوادث,إدارة الثغرات الأمنية,البحث عن التهديدات,برمجيات فدية",
    ),
    (
        "ضابط عمليات وأمن",
        "القيادة والتشغيل وإدارة الأزمات,إدارة الأزمات,التخطيط التشغيلي",
    ),
    (
        "مختص جرائم مالية",
        "احتيال مالي,تصيد احتيالي,تحليل بيانات,إجراءات نظامية وإثباتات",
    ),
    ("مختص دعم تقني قضائي", "أدلة رقمية,كتابة تقارير,التعامل مع الأدلة الرقمية"),
];

/// Share of trainees whose intake row is left blank
const EMPTY_INTAKE_RATE: f64 = 0.15;

#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    pub seed: u64,
    pub courses: usize,
    pub trainees: usize,
    pub interactions: usize,
    /// Interaction dates fall 1..=180 days before this day
    pub today: NaiveDate,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            courses: 80,
            trainees: 200,
            interactions: 2000,
            today: chrono::Local::now().date_naive(),
        }
    }
}

/// Trainee row as written to disk, with the Arabic yes/no flag
#[derive(Serialize)]
struct TraineeRow<'a> {
    trainee_id: &'a TraineeId,
    agency: &'a str,
    military: &'static str,
    role: &'a str,
}

/// The five generated tables
#[derive(Debug, Clone)]
pub struct SyntheticData {
    pub courses: Vec<Course>,
    pub trainees: Vec<Trainee>,
    pub intake: Vec<IntakeProfile>,
    pub interactions: Vec<Interaction>,
    pub role_tags: Vec<RoleTags>,
}

impl SyntheticData {
    pub fn generate(config: &SyntheticConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);

        let role_tags = ROLE_TAGS
            .iter()
            .map(|(role, tags)| RoleTags {
                role: role.to_string(),
                tags: tags.to_string(),
            })
            .collect();

        let courses = (1..=config.courses)
            .map(|i| {
                let track = pick(&mut rng, TRACKS);
                let level = pick(&mut rng, LEVELS);
                let audience = pick(&mut rng, AUDIENCES);
                let keywords = pick_some(&mut rng, INTERESTS, 3, 5).join(", ");
                Course::new(
                    format!("C{i:03}"),
                    format!("دورة {track} ({level}) #{i}"),
                    track,
                    level,
                    audience,
                    format!(
                        "هذه الدورة تغطي: {keywords}. مناسبة لتطوير مهارات المشاركين في {track} مع تطبيقات عملية."
                    ),
                )
            })
            .collect();

        let roles: Vec<&str> = ROLE_TAGS.iter().map(|(role, _)| *role).collect();
        let trainees: Vec<Trainee> = (1..=config.trainees)
            .map(|i| {
                let agency = pick(&mut rng, AGENCIES);
                Trainee {
                    trainee_id: TraineeId::from_number(i as u64),
                    agency: agency.to_string(),
                    military: MILITARY_AGENCIES.contains(&agency),
                    role: pick(&mut rng, &roles).to_string(),
                }
            })
            .collect();

        let intake = trainees
            .iter()
            .map(|trainee| {
                let mut profile = IntakeProfile {
                    trainee_id: trainee.trainee_id.clone(),
                    interests: String::new(),
                    skills: String::new(),
                    goals: String::new(),
                    notes: String::new(),
                };
                if !rng.random_bool(EMPTY_INTAKE_RATE) {
                    profile.interests = pick_some(&mut rng, INTERESTS, 2, 5).join(", ");
                    profile.skills = pick_some(&mut rng, SKILLS, 2, 5).join(", ");
                    profile.goals = pick(&mut rng, GOALS).to_string();
                    profile.notes = pick(&mut rng, NOTES).to_string();
                }
                profile
            })
            .collect();

        let interactions = if config.trainees == 0 || config.courses == 0 {
            Vec::new()
        } else {
            (0..config.interactions)
                .map(|_| {
                    let trainee = rng.random_range(1..=config.trainees) as u64;
                    let course = rng.random_range(1..=config.courses);
                    let event = if rng.random_bool(0.5) {
                        InteractionEvent::Enroll
                    } else {
                        InteractionEvent::Complete
                    };
                    let days_ago = rng.random_range(1..=180);
                    Interaction {
                        trainee_id: TraineeId::from_number(trainee),
                        course_id: format!("C{course:03}"),
                        event,
                        timestamp: config.today - chrono::Duration::days(days_ago),
                    }
                })
                .collect()
        };

        Self {
            courses,
            trainees,
            intake,
            interactions,
            role_tags,
        }
    }

    /// Write all five tables into `dir`, creating it if needed
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let trainee_rows: Vec<TraineeRow<'_>> = self
            .trainees
            .iter()
            .map(|t| TraineeRow {
                trainee_id: &t.trainee_id,
                agency: &t.agency,
                military: if t.military { "نعم" } else { "لا" },
                role: &t.role,
            })
            .collect();

        write_table(&dir.join(ROLE_TAGS_FILE), ROLE_TAGS_HEADER, &self.role_tags)?;
        write_table(&dir.join(COURSES_FILE), COURSES_HEADER, &self.courses)?;
        write_table(&dir.join(TRAINEES_FILE), TRAINEES_HEADER, &trainee_rows)?;
        write_table(&dir.join(INTAKE_FILE), INTAKE_HEADER, &self.intake)?;
        write_table(&dir.join(INTERACTIONS_FILE), INTERACTIONS_HEADER, &self.interactions)?;

        info!(
            courses = self.courses.len(),
            trainees = self.trainees.len(),
            interactions = self.interactions.len(),
            "Synthetic data written to {:?}",
            dir
        );
        Ok(())
    }
}

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Between `min` and `max` distinct items, in random order
fn pick_some<'a>(rng: &mut StdRng, items: &[&'a str], min: usize, max: usize) -> Vec<&'a str> {
    let k = rng.random_range(min..=max);
    items.choose_multiple(rng, k).copied().collect()
}

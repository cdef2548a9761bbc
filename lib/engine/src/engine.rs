use coursematch_core::{
    trainee_profile_text, CourseRecommendation, Error, Result, Trainee, TraineeId,
    TraineeRecommendation,
};
use coursematch_similarity::{rank, SparseVector, TfidfModel};
use coursematch_storage::DataSet;
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Loaded tables, the TF-IDF model fitted on course texts, and the course
/// vectors in that space.
///
/// Built once at startup and shared read-only between requests.
pub struct RecommenderEngine {
    data: DataSet,
    model: TfidfModel,
    course_vectors: Vec<SparseVector>,
}

impl RecommenderEngine {
    /// Load the CSV tables from `data_dir` and fit the model
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        Ok(Self::new(DataSet::load(data_dir)?))
    }

    pub fn new(data: DataSet) -> Self {
        let course_texts: Vec<&str> = data.courses().iter().map(|c| c.text()).collect();
        let model = TfidfModel::fit(&course_texts);
        let course_vectors = model.transform_batch(&course_texts);

        info!(
            courses = course_vectors.len(),
            vocabulary = model.dim(),
            "Course model fitted"
        );

        Self {
            data,
            model,
            course_vectors,
        }
    }

    #[inline]
    pub fn data(&self) -> &DataSet {
        &self.data
    }

    #[inline]
    pub fn model(&self) -> &TfidfModel {
        &self.model
    }

    /// Profile text used for a trainee
    pub fn trainee_profile_text(&self, trainee_id: &str) -> Result<String> {
        let id = TraineeId::parse(trainee_id)?;
        let trainee = self
            .data
            .trainee(&id)
            .ok_or_else(|| Error::TraineeNotFound(id.to_string()))?;
        Ok(self.profile_text(trainee))
    }

    /// Courses ranked by similarity to the trainee's profile
    pub fn recommend_for_trainee(
        &self,
        trainee_id: &str,
        top_k: usize,
    ) -> Result<Vec<CourseRecommendation>> {
        let profile = self.trainee_profile_text(trainee_id)?;
        let query = self.model.transform(&profile);

        let ranked = rank(&query, &self.course_vectors, top_k);
        debug!(
            trainee_id,
            terms = query.nnz(),
            results = ranked.len(),
            "Ranked courses for trainee"
        );

        let courses = self.data.courses();
        Ok(ranked
            .into_iter()
            .map(|r| CourseRecommendation::new(&courses[r.index], r.score))
            .collect())
    }

    /// Trainees ranked by similarity to the course.
    ///
    /// Every trainee profile is rebuilt and vectorized on each call.
    pub fn recommend_for_course(
        &self,
        course_id: &str,
        top_k: usize,
    ) -> Result<Vec<TraineeRecommendation>> {
        let position = self
            .data
            .course_position(course_id)
            .ok_or_else(|| Error::CourseNotFound(course_id.to_string()))?;
        let query = &self.course_vectors[position];

        let trainees = self.data.trainees();
        let profiles: Vec<SparseVector> = trainees
            .par_iter()
            .map(|t| self.model.transform(&self.profile_text(t)))
            .collect();

        let ranked = rank(query, &profiles, top_k);
        debug!(
            course_id,
            candidates = profiles.len(),
            results = ranked.len(),
            "Ranked trainees for course"
        );

        Ok(ranked
            .into_iter()
            .map(|r| TraineeRecommendation::new(&trainees[r.index], r.score))
            .collect())
    }

    fn profile_text(&self, trainee: &Trainee) -> String {
        trainee_profile_text(
            trainee,
            self.data.intake(&trainee.trainee_id),
            self.data.role_tags(&trainee.role),
        )
    }
}

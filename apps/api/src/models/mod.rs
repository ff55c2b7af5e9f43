pub mod assessment;

pub use assessment::{
    AnalysisResult, BigFiveTrait, CareerRecommendation, Category, InterestScore, Question,
    RiasecCategory, StudentInfo, TraitScore, UserResponse,
};

use serde::{Deserialize, Serialize};

/// Page views addressable through the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    Login,
    Admin,
    Signup,
    ManageSubject,
    ManageQuiz,
    AddQuestion,
    ViewQuestions,
    User,
    StartQuiz,
    UserScorecard,
    ManageUser,
    AdminStatistics,
    UserStatistics,
}

impl View {
    /// Identifier of the front-end component that renders this view
    pub fn component(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Login => "Login",
            View::Admin => "Admin",
            View::Signup => "Signup",
            View::ManageSubject => "Manage_Subject",
            View::ManageQuiz => "Manage_Quiz",
            View::AddQuestion => "Add_Question",
            View::ViewQuestions => "View_Questions",
            View::User => "User",
            View::StartQuiz => "StartQuiz",
            View::UserScorecard => "User_Scorecard",
            View::ManageUser => "Manage_User",
            View::AdminStatistics => "Admin_Statistics",
            View::UserStatistics => "User_Statistics",
        }
    }
}

//! The Quizdom page routes.

use super::error::RouterError;
use super::table::{RouteDefinition, RouteTable};
use super::view::View;

/// Parameter carried by the quiz-scoped routes
pub const QUIZ_ID: &str = "quiz_id";

pub mod names {
    pub const HOME: &str = "home";
    pub const LOGIN: &str = "login";
    pub const ADMIN: &str = "admin";
    pub const SIGNUP: &str = "signup";
    pub const MANAGE_SUBJECT: &str = "manage_subject";
    pub const MANAGE_QUIZ: &str = "manage_quiz";
    pub const ADD_QUESTION: &str = "add_question";
    pub const VIEW_QUESTIONS: &str = "view_questions";
    pub const USER: &str = "user";
    pub const START_QUIZ: &str = "start_quiz";
    pub const USER_SCORECARD: &str = "user_scorecard";
    pub const MANAGE_USER: &str = "manage_user";
    pub const ADMIN_STATISTICS: &str = "admin_statistics";
    pub const USER_STATISTICS: &str = "user_statistics";
}

/// (path, name, view) for every page, in declaration order
pub const ROUTES: &[(&str, &str, View)] = &[
    ("/", names::HOME, View::Home),
    ("/login", names::LOGIN, View::Login),
    ("/admin", names::ADMIN, View::Admin),
    ("/signup", names::SIGNUP, View::Signup),
    ("/manage_subject", names::MANAGE_SUBJECT, View::ManageSubject),
    ("/manage_quiz", names::MANAGE_QUIZ, View::ManageQuiz),
    ("/add_question/:quiz_id", names::ADD_QUESTION, View::AddQuestion),
    ("/view_questions/:quiz_id", names::VIEW_QUESTIONS, View::ViewQuestions),
    ("/user", names::USER, View::User),
    ("/start_quiz/:quiz_id", names::START_QUIZ, View::StartQuiz),
    ("/user_scorecard", names::USER_SCORECARD, View::UserScorecard),
    ("/manage_user", names::MANAGE_USER, View::ManageUser),
    ("/admin_statistics", names::ADMIN_STATISTICS, View::AdminStatistics),
    ("/user_statistics", names::USER_STATISTICS, View::UserStatistics),
];

pub fn route_table() -> Result<RouteTable, RouterError> {
    let routes = ROUTES
        .iter()
        .map(|&(path, name, view)| RouteDefinition::new(path, name, view))
        .collect::<Result<Vec<_>, _>>()?;
    RouteTable::new(routes)
}

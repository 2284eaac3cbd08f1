// API Constants
pub const LAMBDA_RESPONSE_PATH: &str = "/api/get-lambda-response";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

// Conversation Constants
pub const USER_LABEL: &str = "You";
pub const ASSISTANT_LABEL: &str = "Lex";
pub const WELCOME_MESSAGE: &str = "👋 Welcome to the chat! Ask me a question.";
pub const VALIDATION_MESSAGE: &str = "Please enter a valid question";
pub const MIN_QUESTION_CHARS: usize = 2;

// UI Constants
pub const APP_TITLE: &str = "Chatbot with Lex and Kendra";

pub mod create_user_web_input;

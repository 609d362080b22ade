mod gemini_client_test;
mod observability;

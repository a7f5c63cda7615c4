
mod access_policy_evaluator_tests;
mod caller_context_tests;
mod query_service_tests;

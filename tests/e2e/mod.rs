// End-to-end tests for the Audioguide Backend HTTP API
//
// Each test gets its own server bound to an ephemeral port through
// test-context lifecycle hooks. The markup engine has no external
// dependencies, so no containers or mocks are involved.

mod helpers;
mod test_markup;
mod test_vendors;

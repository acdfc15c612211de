mod forwarder_tests;
mod listener_tests;

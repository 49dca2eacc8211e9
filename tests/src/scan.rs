mod integration;
mod properties;
mod support;

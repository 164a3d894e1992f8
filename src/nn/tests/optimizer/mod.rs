mod sgd;
mod trait_tests;

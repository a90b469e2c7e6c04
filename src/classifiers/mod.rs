pub mod naive_bayes;

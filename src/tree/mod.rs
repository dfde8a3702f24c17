pub mod segtree_weighted;

mod sort;
mod tree;

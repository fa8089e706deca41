mod combination;
mod pack_sizes;
mod solution;

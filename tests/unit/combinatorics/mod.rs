mod catalan;
mod sorting;

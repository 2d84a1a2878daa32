mod mpi;

pub use mpi::Mpi;

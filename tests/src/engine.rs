mod contract;
mod session;

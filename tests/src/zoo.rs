mod admission;
mod reports;

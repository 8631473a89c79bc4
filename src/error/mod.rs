pub mod engine;

macro_rules! trace {
	($($arg:tt)*) => ({
		#[cfg(feature = "trace_execution")]
		eprintln!("[minicpu] {} @ {}", format!($($arg)*), std::line!());
	});
}

pub(crate) use trace;

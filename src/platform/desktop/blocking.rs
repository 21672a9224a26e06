/// Desktop runs blocking storage calls inline on the UI task.
pub fn run_blocking<F, T>(f: F) -> T
where
    F: FnOnce() -> T,
{
    f()
}

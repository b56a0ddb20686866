use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use http_body_util::BodyExt;
use registrar::router::init_router;
use registrar::state::AppState;
use registrar::views::Views;
use registrar_db::{LecturerStore, RecordStore, StoreError};
use registrar_models::{GradeRow, GradesByStudent, Lecturer, Student, group_grades};
use tower::ServiceExt;

fn unavailable() -> StoreError {
    StoreError::Sql(sqlx::Error::PoolTimedOut)
}

/// In-memory stand-in for the PostgreSQL store.
#[derive(Default)]
pub struct InMemoryRecords {
    pub students: Mutex<BTreeMap<String, Student>>,
    /// (sid, module name, grade)
    pub grades: Mutex<Vec<(String, String, i32)>>,
    /// (mid, lecturer id)
    pub modules: Mutex<Vec<(String, String)>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub writes: AtomicUsize,
}

#[allow(dead_code)]
impl InMemoryRecords {
    pub fn with_students(students: &[(&str, &str, i32)]) -> Self {
        let records = Self::default();
        {
            let mut map = records.students.lock().unwrap();
            for (sid, name, age) in students {
                map.insert(
                    sid.to_string(),
                    Student {
                        sid: sid.to_string(),
                        name: name.to_string(),
                        age: *age,
                    },
                );
            }
        }
        records
    }

    pub fn add_grade(&self, sid: &str, module: &str, grade: i32) {
        self.grades
            .lock()
            .unwrap()
            .push((sid.to_string(), module.to_string(), grade));
    }

    pub fn add_module(&self, mid: &str, lecturer: &str) {
        self.modules
            .lock()
            .unwrap()
            .push((mid.to_string(), lecturer.to_string()));
    }

    pub fn student(&self, sid: &str) -> Option<Student> {
        self.students.lock().unwrap().get(sid).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_reads(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(())
    }

    fn check_writes(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for InMemoryRecords {
    async fn get_all_students(&self) -> Result<Vec<Student>, StoreError> {
        self.check_reads()?;
        Ok(self.students.lock().unwrap().values().cloned().collect())
    }

    async fn get_student_by_id(&self, sid: &str) -> Result<Option<Student>, StoreError> {
        self.check_reads()?;
        Ok(self.student(sid))
    }

    async fn update_student(&self, sid: &str, name: &str, age: i32) -> Result<(), StoreError> {
        self.check_writes()?;
        if let Some(student) = self.students.lock().unwrap().get_mut(sid) {
            student.name = name.to_string();
            student.age = age;
            self.writes.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    async fn add_student(&self, sid: &str, name: &str, age: i32) -> Result<(), StoreError> {
        self.check_writes()?;
        let mut students = self.students.lock().unwrap();
        if students.contains_key(sid) {
            return Err(StoreError::DuplicateStudent(sid.to_string()));
        }
        students.insert(
            sid.to_string(),
            Student {
                sid: sid.to_string(),
                name: name.to_string(),
                age,
            },
        );
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get_all_grades(&self) -> Result<GradesByStudent, StoreError> {
        self.check_reads()?;
        let students = self.students.lock().unwrap();
        let grades = self.grades.lock().unwrap();

        let mut rows = Vec::new();
        for student in students.values() {
            let mut matched = false;
            for (sid, module, grade) in grades.iter() {
                if *sid == student.sid {
                    matched = true;
                    rows.push(GradeRow {
                        student_name: student.name.clone(),
                        module_name: Some(module.clone()),
                        grade: Some(*grade),
                    });
                }
            }
            if !matched {
                rows.push(GradeRow {
                    student_name: student.name.clone(),
                    module_name: None,
                    grade: None,
                });
            }
        }

        // ORDER BY name, grade under a case-insensitive collation.
        rows.sort_by_key(|row| (row.student_name.to_lowercase(), row.grade));

        Ok(group_grades(rows))
    }

    async fn lecturer_has_modules(&self, lecturer_id: &str) -> Result<bool, StoreError> {
        self.check_reads()?;
        Ok(self
            .modules
            .lock()
            .unwrap()
            .iter()
            .any(|(_, lecturer)| lecturer == lecturer_id))
    }
}

/// In-memory stand-in for the MongoDB lecturer collection.
#[derive(Default)]
pub struct InMemoryLecturers {
    pub lecturers: Mutex<Vec<Lecturer>>,
    pub fail_reads: AtomicBool,
    /// Number of upcoming list calls that fail before reads recover.
    pub failing_reads: AtomicUsize,
    pub fail_deletes: AtomicBool,
}

#[allow(dead_code)]
impl InMemoryLecturers {
    pub fn with_lecturers(lecturers: &[(&str, &str)]) -> Self {
        let store = Self::default();
        {
            let mut list = store.lecturers.lock().unwrap();
            for (id, name) in lecturers {
                list.push(Lecturer {
                    id: id.to_string(),
                    name: name.to_string(),
                    did: None,
                });
            }
        }
        store
    }

    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .lecturers
            .lock()
            .unwrap()
            .iter()
            .map(|l| l.id.clone())
            .collect();
        ids.sort();
        ids
    }
}

#[async_trait]
impl LecturerStore for InMemoryLecturers {
    async fn get_all_lecturers(&self) -> Result<Vec<Lecturer>, StoreError> {
        let failing_once = self
            .failing_reads
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing_once || self.fail_reads.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        let mut lecturers = self.lecturers.lock().unwrap().clone();
        lecturers.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(lecturers)
    }

    async fn delete_lecturer(&self, lecturer_id: &str) -> Result<bool, StoreError> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        let mut lecturers = self.lecturers.lock().unwrap();
        let before = lecturers.len();
        lecturers.retain(|l| l.id != lecturer_id);
        Ok(lecturers.len() < before)
    }
}

pub fn setup_test_app(records: Arc<InMemoryRecords>, lecturers: Arc<InMemoryLecturers>) -> Router {
    let static_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public");
    let state = AppState::new(records, lecturers, Views::new().unwrap(), static_dir);
    init_router(state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get("location")
            .and_then(|value| value.to_str().ok())
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(body.to_vec()).unwrap(),
    }
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

#[allow(dead_code)]
pub async fn post_form(app: &Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

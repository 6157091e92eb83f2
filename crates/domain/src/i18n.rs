//! Embedded message catalog for the two supported languages.

use std::borrow::Cow;

use crate::entities::Language;

// key, English, Greek
const CATALOG: &[(&str, &str, &str)] = &[
    // chrome
    ("dashboard", "Dashboard", "Πίνακας ελέγχου"),
    ("all_jobs", "All jobs", "Όλες οι εργασίες"),
    ("create_job", "Create job", "Νέα εργασία"),
    ("register_user", "Register user", "Εγγραφή χρήστη"),
    ("create_service", "Create service", "Νέα υπηρεσία"),
    ("get_services", "Services", "Υπηρεσίες"),
    ("change_password", "Change password", "Αλλαγή κωδικού"),
    ("logout", "Logout", "Αποσύνδεση"),
    ("language", "Language", "Γλώσσα"),
    // buttons
    ("ok", "OK", "OK"),
    ("cancel", "Cancel", "Ακύρωση"),
    ("yes", "Yes", "Ναι"),
    ("no", "No", "Όχι"),
    // dialog titles and messages
    ("success", "Success", "Επιτυχία"),
    ("error", "Error", "Σφάλμα"),
    ("password", "Password", "Κωδικός"),
    ("api_key", "API key", "Κλειδί API"),
    ("add_task", "Add task", "Προσθήκη βήματος"),
    ("output", "Output", "Αποτέλεσμα"),
    (
        "delete_task_confirmation",
        "Remove this task from the job?",
        "Αφαίρεση του βήματος από την εργασία;",
    ),
    ("cancel_job_title", "Cancel job", "Ακύρωση εργασίας"),
    (
        "cancel_job_message",
        "Are you sure you want to cancel this job?",
        "Θέλετε σίγουρα να ακυρώσετε την εργασία;",
    ),
    (
        "service_enable_confirmation_title",
        "Enable service",
        "Ενεργοποίηση υπηρεσίας",
    ),
    (
        "service_enable_confirmation_msg",
        "Enable this service?",
        "Ενεργοποίηση της υπηρεσίας;",
    ),
    (
        "service_disable_confirmation_title",
        "Disable service",
        "Απενεργοποίηση υπηρεσίας",
    ),
    (
        "service_disable_confirmation_msg",
        "Disable this service?",
        "Απενεργοποίηση της υπηρεσίας;",
    ),
    (
        "password_changed",
        "Your password has been changed. Please log in again.",
        "Ο κωδικός άλλαξε. Συνδεθείτε ξανά.",
    ),
    ("job_created", "The job has been created.", "Η εργασία δημιουργήθηκε."),
    ("job_canceled", "The job has been canceled.", "Η εργασία ακυρώθηκε."),
    ("user_registered", "The user has been registered.", "Ο χρήστης καταχωρήθηκε."),
    ("service_created", "The service has been created.", "Η υπηρεσία δημιουργήθηκε."),
    // job states
    ("running", "Running", "Σε εξέλιξη"),
    ("completed", "Completed", "Ολοκληρώθηκε"),
    ("canceled", "Canceled", "Ακυρώθηκε"),
    // client-side validation
    (
        "client-100",
        "Please fill in all required fields.",
        "Συμπληρώστε όλα τα υποχρεωτικά πεδία.",
    ),
    ("client-101", "The email address is not valid.", "Το email δεν είναι έγκυρο."),
    ("client-102", "Please select a task.", "Επιλέξτε ένα βήμα."),
    ("client-103", "The date is not valid.", "Η ημερομηνία δεν είναι έγκυρη."),
    (
        "client-104",
        "The new password does not match its verification.",
        "Ο νέος κωδικός δεν ταιριάζει με την επιβεβαίωση.",
    ),
    // server codes
    ("-1", "The task is not disabled.", "Το βήμα δεν είναι απενεργοποιημένο."),
    ("-2", "The task has active jobs.", "Το βήμα έχει ενεργές εργασίες."),
    ("-3", "The job is already canceled.", "Η εργασία έχει ήδη ακυρωθεί."),
    ("-4", "The job is already completed.", "Η εργασία έχει ήδη ολοκληρωθεί."),
    ("-5", "The asset is empty.", "Το περιεχόμενο είναι κενό."),
    ("-8", "The task already exists.", "Το βήμα υπάρχει ήδη."),
    ("-9", "The task has no input parameters.", "Το βήμα δεν έχει παραμέτρους εισόδου."),
    ("-10", "The task has no output parameters.", "Το βήμα δεν έχει παραμέτρους εξόδου."),
    ("-11", "The start URL is not valid.", "Η διεύθυνση εκκίνησης δεν είναι έγκυρη."),
    ("-12", "The cancel URL is not valid.", "Η διεύθυνση ακύρωσης δεν είναι έγκυρη."),
    ("-13", "The task input is not valid.", "Η είσοδος του βήματος δεν είναι έγκυρη."),
    (
        "-14",
        "The publication date is not valid.",
        "Η ημερομηνία δημοσίευσης δεν είναι έγκυρη.",
    ),
    (
        "-15",
        "The expiration date is not valid.",
        "Η ημερομηνία λήξης δεν είναι έγκυρη.",
    ),
    (
        "-16",
        "The job status can no longer be updated.",
        "Η κατάσταση της εργασίας δεν μπορεί να αλλάξει.",
    ),
    ("-17", "Access to the asset is forbidden.", "Δεν επιτρέπεται η πρόσβαση στο περιεχόμενο."),
    ("-18", "The task output is not valid.", "Η έξοδος του βήματος δεν είναι έγκυρη."),
    ("-19", "The job cannot be completed.", "Η εργασία δεν μπορεί να ολοκληρωθεί."),
    (
        "-20",
        "A linked parameter does not have the same type as its source.",
        "Η συνδεδεμένη παράμετρος δεν έχει τον ίδιο τύπο με την πηγή της.",
    ),
    (
        "-21",
        "A linked output was not found in the previous task.",
        "Η συνδεδεμένη έξοδος δεν βρέθηκε στο προηγούμενο βήμα.",
    ),
    ("-22", "The service name is already in use.", "Το όνομα υπηρεσίας χρησιμοποιείται ήδη."),
    ("-23", "This name is already registered.", "Το όνομα είναι ήδη καταχωρημένο."),
    ("-24", "This username is already registered.", "Το όνομα χρήστη είναι ήδη καταχωρημένο."),
    ("-25", "This email is already registered.", "Το email είναι ήδη καταχωρημένο."),
    (
        "-26",
        "The job contains disabled tasks.",
        "Η εργασία περιέχει απενεργοποιημένα βήματα.",
    ),
    ("-27", "The password is too short.", "Ο κωδικός είναι πολύ μικρός."),
    ("-28", "Wrong username or password.", "Λάθος όνομα χρήστη ή κωδικός."),
    (
        "-29",
        "The new password does not match its verification.",
        "Ο νέος κωδικός δεν ταιριάζει με την επιβεβαίωση.",
    ),
    ("-400", "Some required input is missing.", "Λείπουν υποχρεωτικά στοιχεία."),
    (
        "-401",
        "Your session has expired. Please log in again.",
        "Η συνεδρία έληξε. Συνδεθείτε ξανά.",
    ),
    ("-404", "Not found.", "Δεν βρέθηκε."),
    (
        "-500",
        "The server could not be reached. Please try again later.",
        "Ο διακομιστής δεν είναι διαθέσιμος. Δοκιμάστε αργότερα.",
    ),
];

/// Text of `key` in `language`; unknown keys come back unchanged.
pub fn translate(language: Language, key: &str) -> Cow<'static, str> {
    match lookup(language, key) {
        Some(text) => Cow::Borrowed(text),
        None => Cow::Owned(key.to_string()),
    }
}

pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, el)| match language {
            Language::En => *en,
            Language::El => *el,
        })
}

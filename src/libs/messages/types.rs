#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    AppBanner(String), // version
    ConnectionEstablished(String),
    ConnectionFailed(String),
    ConnectionHint,
    MainMenu,
    InvalidMenuChoice,
    PressEnterToContinue,
    Goodbye,

    // === EMPLOYEE MESSAGES ===
    AddEmployeeHeader,
    EmployeeCreated,
    EmployeeCreateFailed(String),
    EmailAlreadyExists,
    AllEmployeesHeader,
    NoEmployeesFound,
    EmployeesFoundCount(usize),
    ListEmployeesFailed(String),
    SearchByIdHeader,
    EmployeeFound,
    EmployeeNotFound(i64),
    LookupFailed(String),
    UpdateEmployeeHeader,
    CurrentEmployeeDetails,
    EnterNewDetails,
    EmployeeUpdated,
    EmployeeUpdateFailed(String),
    DeleteEmployeeHeader,
    EmployeeToDelete,
    EmployeeDeleted,
    EmployeeDeleteFailed(String),
    DeletionCancelled,
    DepartmentSearchHeader,
    NoEmployeesInDepartment(String),
    EmployeesInDepartment(String),
    SearchFailed(String),

    // === STATISTICS MESSAGES ===
    StatisticsHeader,
    TotalEmployees(i64),
    AverageSalary(String),
    HighestSalary(String),
    LowestSalary(String),
    StatisticsFailed(String),

    // === VALIDATION MESSAGES ===
    Invalid(String),
    InvalidNumber,

    // === PROMPTS ===
    PromptMenuChoice,
    PromptName,
    PromptEmail,
    PromptDepartment,
    PromptSalary,
    PromptEmployeeId,
    PromptEmployeeIdToUpdate,
    PromptEmployeeIdToDelete,
    PromptDepartmentSearch,
    PromptNewName(String),
    PromptNewEmail(String),
    PromptNewDepartment(String),
    PromptNewSalary(String),
    PromptConfirmDelete,
}
